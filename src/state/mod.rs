// State management module
//
// The two observable stores of the data layer. Each owns its canonical value
// behind a fair async mutex (the mutation admission gate) and publishes
// committed snapshots through a tokio watch channel, so reads are always
// immediate and observers never see a partially-applied mutation.

pub mod games;
pub mod settings;

pub use games::GameLibraryStore;
pub use settings::SettingsStore;
