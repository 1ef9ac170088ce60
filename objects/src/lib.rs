pub mod errors;
pub mod exchanges;
pub mod orders;
pub mod probe;
pub mod responses;
pub mod trades;
