//! Phase field lists.
//!
//! The three collection phases in their fixed traversal order. These lists
//! are the single source of truth for prompt order; cursors index into them.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::catalog::{
    self, JENIS_KELAMIN, KONDISI_GIGI, KONDISI_GIGIGELIGI, LETAK_KARIES, OKLUSI, PALATUM,
    REKOMENDASI_PERAWATAN, REKOMENDASI_UTAMA, TINDAKAN, TORUS_MANDIBULARIS, TORUS_PALATINUS,
};
use super::field::FieldDefinition;
use crate::domain::record::Record;

/// The three ordered collection phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Patient,
    Teeth,
    Examination,
}

impl Phase {
    /// The phase that follows this one, or `None` after examination.
    pub fn next(&self) -> Option<Phase> {
        match self {
            Phase::Patient => Some(Phase::Teeth),
            Phase::Teeth => Some(Phase::Examination),
            Phase::Examination => None,
        }
    }
}

fn skip_letak_karies(draft: &Record) -> bool {
    match draft.get("kondisiGigi") {
        Some(label) => !catalog::condition_is_caries_bearing(label),
        None => true,
    }
}

pub static PATIENT_FIELDS: &[FieldDefinition] = &[
    FieldDefinition::text("namaPasien", "Nama Pasien"),
    FieldDefinition::text("nik", "NIK / No. RM"),
    FieldDefinition::single_choice("jenisKelamin", "Jenis Kelamin", &JENIS_KELAMIN),
    FieldDefinition::text("usia", "Usia"),
    FieldDefinition::text("namaWali", "Nama Wali Pasien"),
    FieldDefinition::text("golonganDarah", "Golongan Darah"),
    FieldDefinition::text("alamat", "Alamat"),
    FieldDefinition::text("noTelepon", "No. Telepon"),
    FieldDefinition::text("tanggalLahir", "Tanggal Lahir (DD-MM-YYYY)"),
    FieldDefinition::text("lokasiPemeriksaan", "Lokasi Pemeriksaan"),
    FieldDefinition::text("dokterPemeriksa", "Dokter Pemeriksa"),
];

pub static TEETH_FIELDS: &[FieldDefinition] = &[
    FieldDefinition::text("gigiDikeluhkan", "Gigi yang Dikeluhkan"),
    FieldDefinition::single_choice("kondisiGigi", "Kondisi Gigi", &KONDISI_GIGI),
    FieldDefinition::single_choice("letakKaries", "Letak Karies", &LETAK_KARIES)
        .with_skip(skip_letak_karies),
    FieldDefinition::text("diagnosa", "Diagnosa"),
    FieldDefinition::single_choice("tindakan", "Tindakan", &TINDAKAN),
    FieldDefinition::single_choice(
        "rekomendasiPerawatan",
        "Rekomendasi Perawatan",
        &REKOMENDASI_PERAWATAN,
    ),
];

pub static EXAMINATION_FIELDS: &[FieldDefinition] = &[
    FieldDefinition::single_choice("oklusi", "Oklusi", &OKLUSI),
    FieldDefinition::single_choice("torusPalatinus", "Torus Palatinus", &TORUS_PALATINUS),
    FieldDefinition::single_choice(
        "torusMandibularis",
        "Torus Mandibularis",
        &TORUS_MANDIBULARIS,
    ),
    FieldDefinition::single_choice("palatum", "Palatum", &PALATUM),
    FieldDefinition::text("diastema", "Diastema"),
    FieldDefinition::text("gigiAnomali", "Gigi Anomali"),
    FieldDefinition::text("skorD", "D (Decay)"),
    FieldDefinition::text("skorM", "M (Missing)"),
    FieldDefinition::text("skorF", "F (Filled)"),
    FieldDefinition::text("skorDMF", "Skor DMF"),
    FieldDefinition::boolean("faseGeligi", "Fase Geligi Campuran"),
    FieldDefinition::boolean("molarErupsi", "4 Molar Permanen RA-RB Sudah Erupsi Sempurna"),
    FieldDefinition::boolean(
        "insisifErupsi",
        "4 Insisif Permanen RA-RB Sudah Erupsi Sempurna",
    ),
    FieldDefinition::boolean("relasiMolarKanan", "Relasi Molar Kanan Neutroklasi"),
    FieldDefinition::boolean("relasiMolarKiri", "Relasi Molar Kiri Neutroklasi"),
    FieldDefinition::boolean("kasusSederhana", "Kasus Sederhana (Dental bukan Skeletal)"),
    FieldDefinition::boolean("diastemaMultipel", "Diastema Multipel"),
    FieldDefinition::single_choice("kondisiGigigeligi", "Kondisi Gigigeligi", &KONDISI_GIGIGELIGI),
    FieldDefinition::text("lainLain", "Lain-Lain / Catatan"),
    FieldDefinition::single_choice(
        "rekomendasiUtama",
        "Rekomendasi Perawatan Utama",
        &REKOMENDASI_UTAMA,
    ),
    FieldDefinition::text("dokterPJ", "Dokter Gigi Penanggung Jawab Lapangan"),
];

/// Returns the ordered field list for a phase.
pub fn fields(phase: Phase) -> &'static [FieldDefinition] {
    match phase {
        Phase::Patient => PATIENT_FIELDS,
        Phase::Teeth => TEETH_FIELDS,
        Phase::Examination => EXAMINATION_FIELDS,
    }
}

static FIELD_INDEX: Lazy<HashMap<(Phase, &'static str), usize>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for phase in [Phase::Patient, Phase::Teeth, Phase::Examination] {
        for (position, field) in fields(phase).iter().enumerate() {
            index.insert((phase, field.key), position);
        }
    }
    index
});

/// Finds a field by key within a phase. Used by the edit flow, which
/// addresses fields out of traversal order.
pub fn field_by_key(phase: Phase, key: &str) -> Option<&'static FieldDefinition> {
    FIELD_INDEX
        .get(&(phase, key))
        .map(|&position| &fields(phase)[position])
}
