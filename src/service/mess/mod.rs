//! Mess subscription and billing service.

use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::debug;

use crate::{
    data::mess::{bill::BillRepository, mess::MessRepository, profile::ProfileRepository},
    error::{mess::MessError, Error},
    model::{db::UserProfileModel, mess::BillDto},
};

/// Checks whether a profile's active subscription targets the given mess.
///
/// The single ownership guard shared by the billing read and the cancellation
/// flow.
pub fn is_subscribed(profile: &UserProfileModel, mess_id: i32) -> bool {
    profile.mess_id == Some(mess_id)
}

/// Service for the subscription-guarded mess operations.
pub struct MessService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessService<'a> {
    /// Creates a new instance of [`MessService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the caller's profile and applies the ownership guard.
    ///
    /// # Returns
    /// - `Ok(UserProfileModel)` - Profile exists and is subscribed to `mess_id`
    /// - `Err(Error::MessError(MessError::ProfileNotFound))` - No profile for the identity
    /// - `Err(Error::MessError(MessError::NotSubscribed))` - Guard failure, nothing mutated
    async fn subscribed_profile(
        &self,
        user_id: i32,
        mess_id: i32,
    ) -> Result<UserProfileModel, Error> {
        let profile = ProfileRepository::new(self.db)
            .find_by_user_id(user_id)
            .await?
            .ok_or(MessError::ProfileNotFound(user_id))?;

        if !is_subscribed(&profile, mess_id) {
            return Err(MessError::NotSubscribed.into());
        }

        Ok(profile)
    }

    /// Fetches the billing record of the caller for the mess they are
    /// subscribed to, flattened to profile name, mess name, and amounts.
    ///
    /// # Returns
    /// - `Ok(BillDto)` - Bill found for the (profile, mess) pair
    /// - `Err(Error::MessError(MessError::NotSubscribed))` - Guard failure
    /// - `Err(Error::MessError(MessError::MessNotFound))` - Subscribed mess row absent
    /// - `Err(Error::MessError(MessError::BillNotFound))` - Subscribed but no bill row
    pub async fn get_bill(&self, user_id: i32, mess_id: i32) -> Result<BillDto, Error> {
        let profile = self.subscribed_profile(user_id, mess_id).await?;

        let mess = MessRepository::new(self.db)
            .get_by_id(mess_id)
            .await?
            .ok_or(MessError::MessNotFound(mess_id))?;

        let bill = BillRepository::new(self.db)
            .find_by_profile_and_mess(profile.id, mess.id)
            .await?
            .ok_or(MessError::BillNotFound {
                user_profile_id: profile.id,
                mess_id: mess.id,
            })?;

        Ok(BillDto {
            name: profile.name,
            mess: mess.name,
            monthly_bill: bill.monthly_bill,
            extra_charges: bill.extra_charges,
        })
    }

    /// Cancels the caller's subscription to the mess.
    ///
    /// The bill deletion and the profile update commit or roll back together;
    /// a half-cancelled state is never persisted.
    ///
    /// # Returns
    /// - `Ok(())` - Bill deleted and `mess_id` cleared
    /// - `Err(Error::MessError(MessError::NotSubscribed))` - Guard failure, nothing mutated
    /// - `Err(Error::MessError(MessError::BillNotFound))` - No bill for the pair, nothing mutated
    pub async fn cancel_subscription(&self, user_id: i32, mess_id: i32) -> Result<(), Error> {
        let profile = self.subscribed_profile(user_id, mess_id).await?;

        let txn = self.db.begin().await?;

        let delete_result = BillRepository::new(&txn)
            .delete_by_profile_and_mess(profile.id, mess_id)
            .await?;

        if delete_result.rows_affected == 0 {
            txn.rollback().await?;

            return Err(MessError::BillNotFound {
                user_profile_id: profile.id,
                mess_id,
            }
            .into());
        }

        // The profile read above predates the transaction and may be stale.
        ProfileRepository::new(&txn)
            .clear_subscription(profile.id)
            .await?
            .ok_or(MessError::ProfileNotFound(user_id))?;

        txn.commit().await?;

        debug!(
            user_id = %user_id,
            mess_id = %mess_id,
            "Cancelled mess subscription"
        );

        Ok(())
    }
}
