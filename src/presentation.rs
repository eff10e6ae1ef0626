//! User-facing text for acquisition state and submission results.
//!
//! The endpoint's message is always shown verbatim; only the framing around
//! it and messages for locally detected errors are localized.

use crate::errors::RegistrationError;
use crate::types::internal::{AcquisitionState, SubmissionResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Locale {
    #[default]
    #[value(name = "ja")]
    Japanese,
    #[value(name = "en")]
    English,
}

pub fn error_message(error: &RegistrationError, locale: Locale) -> String {
    match locale {
        Locale::English => error.to_string(),
        Locale::Japanese => match error {
            RegistrationError::Configuration(detail) => format!("設定エラー: {}", detail),
            RegistrationError::ProviderLoad(_) => {
                "ログイン機能を読み込めませんでした。時間をおいて再度お試しください".to_string()
            }
            RegistrationError::ProviderAuth(_) => {
                "ログインを確認できませんでした。アプリのメニューからこのページを開いてください".to_string()
            }
            RegistrationError::MissingIdentity => "ログイン情報がまだ取得できていません".to_string(),
            RegistrationError::ConsentRequired => "登録には同意が必要です".to_string(),
            RegistrationError::InsufficientContactInfo => {
                "9桁以上の電話番号、または保管コードを入力してください".to_string()
            }
            RegistrationError::SubmissionInProgress => "送信中です。しばらくお待ちください".to_string(),
            RegistrationError::Server { status } => {
                format!("サーバーエラーが発生しました (ステータス {})", status)
            }
            RegistrationError::MalformedResponse(_) => "サーバーの応答を読み取れませんでした".to_string(),
            RegistrationError::Network(_) => "通信に失敗しました。もう一度お試しください".to_string(),
        },
    }
}

pub fn render_submission(result: &SubmissionResult, locale: Locale) -> String {
    let (success_title, failure_title, contract_label) = match locale {
        Locale::Japanese => ("登録が完了しました", "登録に失敗しました", "契約番号"),
        Locale::English => ("Registration complete", "Registration failed", "Contract code"),
    };

    match result {
        SubmissionResult::Success { message, contract_code } => {
            let mut text = format!("{}\n{}", success_title, message);
            if let Some(code) = contract_code {
                text.push_str(&format!("\n{}: {}", contract_label, code));
            }
            text
        }
        SubmissionResult::Failure { message, error } => {
            let detail = match error {
                Some(error) => error_message(error, locale),
                None => message.clone(),
            };
            format!("{}\n{}", failure_title, detail)
        }
    }
}

pub fn render_acquisition(state: &AcquisitionState, locale: Locale) -> String {
    if let Some(error) = &state.error {
        return error_message(error, locale);
    }
    if let Some(identity) = &state.identity {
        return match locale {
            Locale::Japanese => format!("{} さんとしてログイン中", identity.display_name),
            Locale::English => format!("Signed in as {}", identity.display_name),
        };
    }
    match (state.loading, locale) {
        (true, Locale::Japanese) => "読み込み中...".to_string(),
        (true, Locale::English) => "Loading...".to_string(),
        (false, Locale::Japanese) => "ログインページへ移動します".to_string(),
        (false, Locale::English) => "Redirecting to login".to_string(),
    }
}
