pub mod add;
pub mod agenda;
pub mod day;
pub mod export;
pub mod import;
pub mod month;
pub mod search;
pub mod upcoming;
pub mod week;
