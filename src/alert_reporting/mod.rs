/// Domain layer - Dependabot alert model and pure reporting logic
///
/// Nothing in here performs I/O; adapters feed decoded alerts in and take
/// projected rows out.
pub mod domain;
pub mod services;
