pub mod case_history;
pub mod coming_soon;
pub mod crypto_loss;
pub mod dashboard;
pub mod home;
pub mod language;
pub mod login;
pub mod money_recovery;
pub mod not_found;
pub mod notifications;
pub mod recovery_options;
pub mod signup;
pub mod social_media;
pub mod socials;
