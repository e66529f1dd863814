//! User-facing message text.
//!
//! The product ships in Indonesian; these are the exact strings users see.

use crate::domain::session::SessionError;

pub const ASK_DOCTOR_NAME: &str = "Masukkan Nama Dokter Pemeriksa";
pub const CONTINUE_SESSION: &str =
    "Anda memiliki input data yang belum selesai. Ingin melanjutkan?";
pub const FIELD_PROMPT_PREFIX: &str = "Masukkan ";
pub const EDIT_FIELD_PROMPT_SUFFIX: &str = " yang baru";
pub const ASK_ADD_MORE_TEETH: &str = "Apakah ada gigi lain yang mau ditambahkan?";
pub const SUMMARY_HEADER: &str = "📋 *Ringkasan Data Pasien*\n\nSilakan periksa data berikut:\n\n";
pub const SUMMARY_QUESTION: &str = "\nApakah data sudah benar?";
pub const SUCCESS: &str =
    "✅ Data berhasil disimpan!\n\nKetik /start untuk memulai ulang pencatatan.";
pub const CANCELLED: &str = "❌ Input data dibatalkan. Data tidak disimpan.";
pub const ERROR_SAVE_FAILED: &str = "Data gagal disimpan. Silakan coba lagi.";
pub const ERROR_NO_ACTIVE_SESSION: &str = "Tidak ada sesi aktif. Ketik /start untuk memulai.";
pub const ERROR_ALREADY_HAS_SESSION: &str =
    "Anda sudah memiliki sesi aktif. Selesaikan atau gunakan /exit untuk membatalkan.";
pub const SELECT_FIELD_TO_EDIT: &str = "Pilih field yang ingin diubah:";
pub const SELECT_TOOTH_FIELD_TO_EDIT: &str = "Pilih field gigi yang ingin diubah:";
pub const SELECT_CARIES_GALLERY: &str = "Pilih karies yang ingin Anda lihat:";
pub const CARIES_NOT_FOUND: &str = "Jenis karies tidak ditemukan.";

/// Greeting shown once the doctor's name is recorded.
pub fn welcome(doctor_name: &str) -> String {
    format!(
        "Hai dokter {doctor_name}, semangat kerjanya hari ini🤗!\nKetik /newpatient untuk memulai pendataan."
    )
}

/// Sequential prompt for a free-text field.
pub fn field_prompt(label: &str) -> String {
    format!("{FIELD_PROMPT_PREFIX}{label}:")
}

/// Prompt for re-entering a field from the edit menu.
pub fn edit_field_prompt(label: &str) -> String {
    format!("{FIELD_PROMPT_PREFIX}{label}{EDIT_FIELD_PROMPT_SUFFIX}:")
}

/// Caption for a caries reference image.
pub fn caries_caption(label: &str) -> String {
    format!("Gambar {label}")
}

/// Plain-language rendering of a recoverable dispatch error.
pub fn error_message(error: &SessionError) -> &'static str {
    match error {
        SessionError::NoActiveSession => ERROR_NO_ACTIVE_SESSION,
        SessionError::DuplicateSessionRequest => ERROR_ALREADY_HAS_SESSION,
        SessionError::PersistenceFailure { .. } => ERROR_SAVE_FAILED,
        SessionError::InvalidTransition(_) => ERROR_NO_ACTIVE_SESSION,
    }
}
