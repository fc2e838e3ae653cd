mod donor;

pub use donor::{BloodGroup, Donor, DonorRow, Gender, NewDonor};
