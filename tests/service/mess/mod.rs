mod cancel_subscription;
mod get_bill;
