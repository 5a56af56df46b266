mod bill;
mod reads;
