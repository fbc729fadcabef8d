pub mod clients;
pub mod masters;
pub mod materials;
pub mod planning;
pub mod samples;
pub mod styles;
pub mod timing;
