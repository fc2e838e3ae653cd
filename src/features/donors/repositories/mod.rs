mod donor_repository;

pub use donor_repository::{CreateOutcome, DonorRepository, PgDonorRepository};
