mod donor_dto;

pub use donor_dto::DonorSubmissionDto;
