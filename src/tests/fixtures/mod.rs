// Shared test fixtures. Compiled into the crate only under cfg(test) and reached through
// `crate::tests::fixtures`.

pub mod commands {
    pub mod clock_in;
}
pub mod identity;
pub mod jobs;
pub mod time_entries;
