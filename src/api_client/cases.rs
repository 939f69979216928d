use chrono::NaiveDate;
use serde::Deserialize;
use web_sys::{File, FormData};

use super::{get_authenticated, post_authenticated_multipart, ApiError};

/// Acknowledgment returned by the case-submission endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Crypto-loss intake form. Scalars are kept as entered; the API
/// receives every field, empty or not, as a multipart part.
#[derive(Debug, Clone, PartialEq)]
pub struct CryptoLossForm {
    pub title: String,
    pub description: String,
    pub amount_lost: String,
    pub usdt_value: String,
    pub txid: String,
    pub sender_wallet: String,
    pub receiver_wallet: String,
    pub platform_used: String,
    pub blockchain_hash: String,
    pub payment_method: String,
    pub exchange_info: String,
    pub wallet_backup: String,
    pub crypto_type: String,
    pub transaction_datetime: String,
    pub loss_description: String,
    pub supporting_documents: Vec<File>,
}

impl Default for CryptoLossForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            amount_lost: String::new(),
            usdt_value: String::new(),
            txid: String::new(),
            sender_wallet: String::new(),
            receiver_wallet: String::new(),
            platform_used: String::new(),
            blockchain_hash: String::new(),
            payment_method: String::new(),
            exchange_info: String::new(),
            wallet_backup: String::new(),
            crypto_type: "Bitcoin".to_string(),
            transaction_datetime: String::new(),
            loss_description: String::new(),
            supporting_documents: Vec::new(),
        }
    }
}

pub const CRYPTO_TYPES: &[&str] = &["Bitcoin", "Ethereum", "USDT", "BNB", "Solana", "Other"];

impl CryptoLossForm {
    /// Route a named input's value to its field, mirroring the form's
    /// `name` attributes.
    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "title" => self.title = value,
            "description" => self.description = value,
            "amount_lost" => self.amount_lost = value,
            "usdt_value" => self.usdt_value = value,
            "txid" => self.txid = value,
            "sender_wallet" => self.sender_wallet = value,
            "receiver_wallet" => self.receiver_wallet = value,
            "platform_used" => self.platform_used = value,
            "blockchain_hash" => self.blockchain_hash = value,
            "payment_method" => self.payment_method = value,
            "exchange_info" => self.exchange_info = value,
            "wallet_backup" => self.wallet_backup = value,
            "crypto_type" => self.crypto_type = value,
            "transaction_datetime" => self.transaction_datetime = value,
            "loss_description" => self.loss_description = value,
            other => log::warn!("Unknown crypto form field: {}", other),
        }
    }

    /// Scalar parts of the multipart body, in submission order.
    pub fn scalar_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.clone()),
            ("description", self.description.clone()),
            ("amount_lost", self.amount_lost.clone()),
            ("usdt_value", self.usdt_value.clone()),
            ("txid", self.txid.clone()),
            ("sender_wallet", self.sender_wallet.clone()),
            ("receiver_wallet", self.receiver_wallet.clone()),
            ("platform_used", self.platform_used.clone()),
            ("blockchain_hash", self.blockchain_hash.clone()),
            ("payment_method", self.payment_method.clone()),
            ("exchange_info", self.exchange_info.clone()),
            ("wallet_backup", self.wallet_backup.clone()),
            ("crypto_type", self.crypto_type.clone()),
            ("transaction_datetime", self.transaction_datetime.clone()),
            ("loss_description", self.loss_description.clone()),
        ]
    }
}

/// Money-recovery intake form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MoneyRecoveryForm {
    pub title: String,
    pub description: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub identification: String,
    pub amount: String,
    pub ref_number: String,
    pub bank: String,
    pub iban: String,
    pub datetime: String,
    pub supporting_documents: Vec<File>,
}

impl MoneyRecoveryForm {
    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "title" => self.title = value,
            "description" => self.description = value,
            "first_name" => self.first_name = value,
            "last_name" => self.last_name = value,
            "phone" => self.phone = value,
            "email" => self.email = value,
            "identification" => self.identification = value,
            "amount" => self.amount = value,
            "ref_number" => self.ref_number = value,
            "bank" => self.bank = value,
            "iban" => self.iban = value,
            "datetime" => self.datetime = value,
            other => log::warn!("Unknown money recovery form field: {}", other),
        }
    }

    pub fn scalar_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.clone()),
            ("description", self.description.clone()),
            ("first_name", self.first_name.clone()),
            ("last_name", self.last_name.clone()),
            ("phone", self.phone.clone()),
            ("email", self.email.clone()),
            ("identification", self.identification.clone()),
            ("amount", self.amount.clone()),
            ("ref_number", self.ref_number.clone()),
            ("bank", self.bank.clone()),
            ("iban", self.iban.clone()),
            ("datetime", self.datetime.clone()),
        ]
    }
}

/// Social-media account recovery form. Unlike the other two intakes,
/// empty fields are left out of the payload entirely, and at most one
/// profile picture is attached.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SocialMediaRecoveryForm {
    pub title: String,
    pub platform: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub username: String,
    pub profile_url: String,
    pub account_creation_date: String,
    pub last_access_date: String,
    pub profile_pic: Option<File>,
}

pub const SOCIAL_PLATFORMS: &[&str] = &[
    "Facebook",
    "Instagram",
    "X (Twitter)",
    "TikTok",
    "Snapchat",
    "WhatsApp",
    "Telegram",
    "Other",
];

impl SocialMediaRecoveryForm {
    pub fn set_field(&mut self, name: &str, value: String) {
        match name {
            "title" => self.title = value,
            "platform" => self.platform = value,
            "full_name" => self.full_name = value,
            "email" => self.email = value,
            "phone" => self.phone = value,
            "username" => self.username = value,
            "profile_url" => self.profile_url = value,
            "account_creation_date" => self.account_creation_date = value,
            "last_access_date" => self.last_access_date = value,
            other => log::warn!("Unknown social recovery form field: {}", other),
        }
    }

    /// Non-empty scalar parts only.
    pub fn scalar_fields(&self) -> Vec<(&'static str, String)> {
        [
            ("title", &self.title),
            ("platform", &self.platform),
            ("full_name", &self.full_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("username", &self.username),
            ("profile_url", &self.profile_url),
            ("account_creation_date", &self.account_creation_date),
            ("last_access_date", &self.last_access_date),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, value)| (name, value.clone()))
        .collect()
    }
}

fn new_form_data() -> Result<FormData, ApiError> {
    FormData::new().map_err(|_| ApiError::Network("FormData construction failed".to_string()))
}

fn append_scalars(
    data: &FormData,
    fields: Vec<(&'static str, String)>,
) -> Result<(), ApiError> {
    for (name, value) in fields {
        data.append_with_str(name, &value)
            .map_err(|_| ApiError::Network(format!("failed to append field {name}")))?;
    }
    Ok(())
}

fn append_files(data: &FormData, name: &'static str, files: &[File]) -> Result<(), ApiError> {
    for file in files {
        data.append_with_blob_and_filename(name, file, &file.name())
            .map_err(|_| ApiError::Network(format!("failed to attach file to {name}")))?;
    }
    Ok(())
}

impl CryptoLossForm {
    /// Assemble the multipart payload exactly as the wire expects it.
    pub fn multipart_payload(&self) -> Result<FormData, ApiError> {
        let data = new_form_data()?;
        append_scalars(&data, self.scalar_fields())?;
        append_files(&data, "supporting_documents", &self.supporting_documents)?;
        Ok(data)
    }
}

impl MoneyRecoveryForm {
    pub fn multipart_payload(&self) -> Result<FormData, ApiError> {
        let data = new_form_data()?;
        append_scalars(&data, self.scalar_fields())?;
        append_files(&data, "supporting_documents", &self.supporting_documents)?;
        Ok(data)
    }
}

impl SocialMediaRecoveryForm {
    pub fn multipart_payload(&self) -> Result<FormData, ApiError> {
        let data = new_form_data()?;
        append_scalars(&data, self.scalar_fields())?;
        if let Some(pic) = &self.profile_pic {
            data.append_with_blob_and_filename("profile_pic", pic, &pic.name())
                .map_err(|_| ApiError::Network("failed to attach profile picture".to_string()))?;
        }
        Ok(data)
    }
}

/// Submit a crypto-loss case. One multipart POST; never retried.
pub async fn submit_crypto_case(form: &CryptoLossForm) -> Result<SubmissionResponse, ApiError> {
    post_authenticated_multipart("/cases/crypto/", form.multipart_payload()?).await
}

/// Submit a money-recovery case.
pub async fn submit_money_recovery_case(
    form: &MoneyRecoveryForm,
) -> Result<SubmissionResponse, ApiError> {
    post_authenticated_multipart("/cases/money-recovery/", form.multipart_payload()?).await
}

/// Submit a social-media recovery case.
pub async fn submit_social_media_case(
    form: &SocialMediaRecoveryForm,
) -> Result<SubmissionResponse, ApiError> {
    post_authenticated_multipart("/cases/social-media/", form.multipart_payload()?).await
}

/// One case in the history view.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CaseSummary {
    pub id: String,
    pub title: String,
    /// ISO date (YYYY-MM-DD) as reported by the API.
    pub date: String,
    pub status: String,
}

impl CaseSummary {
    fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// Fetch the current user's cases for the history view.
pub async fn list_cases() -> Result<Vec<CaseSummary>, ApiError> {
    log::trace!("Fetching case list");
    get_authenticated("/cases/").await
}

/// Client-side filter for the history view: case-insensitive substring
/// match on title or id, and optional exact-date match.
pub fn filter_cases<'a>(
    cases: &'a [CaseSummary],
    search: &str,
    date: Option<NaiveDate>,
) -> Vec<&'a CaseSummary> {
    let needle = search.to_lowercase();
    cases
        .iter()
        .filter(|case| {
            let matches_search = needle.is_empty()
                || case.title.to_lowercase().contains(&needle)
                || case.id.to_lowercase().contains(&needle);
            let matches_date = match date {
                Some(selected) => case.parsed_date() == Some(selected),
                None => true,
            };
            matches_search && matches_date
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crypto_scalars_cover_every_field_stringified() {
        let mut form = CryptoLossForm::default();
        form.set_field("title", "Stolen BTC".into());
        form.set_field("amount_lost", "1500.00000000".into());
        form.set_field("wallet_backup", "True".into());

        let fields = form.scalar_fields();
        assert_eq!(fields.len(), 15);
        assert!(fields.contains(&("title", "Stolen BTC".to_string())));
        assert!(fields.contains(&("amount_lost", "1500.00000000".to_string())));
        assert!(fields.contains(&("wallet_backup", "True".to_string())));
        // Untouched fields are still present, matching the wire contract.
        assert!(fields.contains(&("txid", String::new())));
        assert!(fields.contains(&("crypto_type", "Bitcoin".to_string())));
    }

    #[test]
    fn money_scalars_follow_declaration_order() {
        let form = MoneyRecoveryForm::default();
        let names: Vec<&str> = form.scalar_fields().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names[0], "title");
        assert_eq!(names[names.len() - 1], "datetime");
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn social_scalars_skip_empty_fields() {
        let mut form = SocialMediaRecoveryForm::default();
        form.set_field("title", "Hacked account".into());
        form.set_field("platform", "Instagram".into());

        let fields = form.scalar_fields();
        assert_eq!(fields.len(), 2);
        assert!(fields.iter().all(|(_, v)| !v.is_empty()));
    }

    #[test]
    fn unknown_field_names_are_ignored() {
        let mut form = CryptoLossForm::default();
        let before = form.clone();
        form.set_field("no_such_field", "x".into());
        assert_eq!(form, before);
    }

    fn sample_cases() -> Vec<CaseSummary> {
        vec![
            CaseSummary {
                id: "C-1001".into(),
                title: "Missing Document Recovery".into(),
                date: "2024-12-01".into(),
                status: "Resolved".into(),
            },
            CaseSummary {
                id: "C-1002".into(),
                title: "Bank Account Freeze".into(),
                date: "2024-12-05".into(),
                status: "Pending".into(),
            },
            CaseSummary {
                id: "C-1003".into(),
                title: "Unauthorized Withdrawal".into(),
                date: "2024-12-07".into(),
                status: "In Progress".into(),
            },
        ]
    }

    #[test]
    fn search_matches_title_or_id_case_insensitively() {
        let cases = sample_cases();
        let by_title = filter_cases(&cases, "bank", None);
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, "C-1002");

        let by_id = filter_cases(&cases, "c-1003", None);
        assert_eq!(by_id.len(), 1);

        assert_eq!(filter_cases(&cases, "", None).len(), 3);
    }

    #[test]
    fn date_filter_requires_exact_match() {
        let cases = sample_cases();
        let date = NaiveDate::from_ymd_opt(2024, 12, 5).unwrap();
        let filtered = filter_cases(&cases, "", Some(date));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "C-1002");

        let none = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(filter_cases(&cases, "", Some(none)).is_empty());
    }
}
