// Style catalog and material consumption
pub mod materials;
pub mod styles;

// Sample development lifecycle
pub mod samples;

// Operation timing and SMV snapshots
pub mod timing;

// TNA / plan scheduling snapshots
pub mod planning;

// Master data (operation types, colors, sizes, operations module)
pub mod masters;

// Buyer / supplier directory (clients store)
pub mod clients;
