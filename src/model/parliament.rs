use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::db::{ContactModel, SuggestionModel, UpdateModel};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ContactDto {
    pub id: i32,
    pub name: String,
    pub position: String,
    pub email: String,
    pub upvotes: i32,
    pub downvotes: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateContactDto {
    pub name: String,
    pub position: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub upvotes: i32,
    pub downvotes: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateUpdateDto {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuggestionDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub upvotes: i32,
    pub downvotes: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateSuggestionDto {
    pub title: String,
    pub description: String,
}

impl From<ContactModel> for ContactDto {
    fn from(contact: ContactModel) -> Self {
        Self {
            id: contact.id,
            name: contact.name,
            position: contact.position,
            email: contact.email,
            upvotes: contact.upvotes,
            downvotes: contact.downvotes,
        }
    }
}

impl From<UpdateModel> for UpdateDto {
    fn from(update: UpdateModel) -> Self {
        Self {
            id: update.id,
            title: update.title,
            description: update.description,
            upvotes: update.upvotes,
            downvotes: update.downvotes,
        }
    }
}

impl From<SuggestionModel> for SuggestionDto {
    fn from(suggestion: SuggestionModel) -> Self {
        Self {
            id: suggestion.id,
            title: suggestion.title,
            description: suggestion.description,
            upvotes: suggestion.upvotes,
            downvotes: suggestion.downvotes,
        }
    }
}
