//! Static choice catalogs.
//!
//! Keys and labels mirror the clinic's record sheet; labels are what gets
//! stored in the record and written to the persisted row.

use super::field::{Choice, ChoiceSet};

/// Fixed Ya/Tidak set backing every boolean-choice field.
pub static YES_NO: ChoiceSet = ChoiceSet {
    id: "yn",
    prompt: "",
    items: &[Choice::new("Ya", "Ya"), Choice::new("Tidak", "Tidak")],
};

pub static JENIS_KELAMIN: ChoiceSet = ChoiceSet {
    id: "jk",
    prompt: "Pilih Jenis Kelamin:",
    items: &[
        Choice::new("LAKI-LAKI", "LAKI-LAKI"),
        Choice::new("PEREMPUAN", "PEREMPUAN"),
    ],
};

pub static KONDISI_GIGI: ChoiceSet = ChoiceSet {
    id: "kondisi",
    prompt: "Pilih Kondisi Gigi:",
    items: &[
        Choice::new("Fraktur Gigi", "Fraktur"),
        Choice::new("Akar Tertinggal", "Sisa Akar"),
        Choice::new("Tambalan", "Tambalan"),
        Choice::new("Gigi Hilang (Ekstraksi)", "Gigi Hilang"),
        Choice::new("Impaksi", "Impaksi"),
        Choice::new("Sehat", "Gigi Sehat"),
        Choice::new("karies", "Karies"),
    ],
};

pub static LETAK_KARIES: ChoiceSet = ChoiceSet {
    id: "karies",
    prompt: "Pilih Letak Karies:",
    items: &[
        Choice::new("D", "D-car"),
        Choice::new("L", "L-car"),
        Choice::new("M", "M-car"),
        Choice::new("O", "O-car"),
        Choice::new("V", "V-car"),
    ],
};

pub static TINDAKAN: ChoiceSet = ChoiceSet {
    id: "tindakan",
    prompt: "Pilih Tindakan:",
    items: &[
        Choice::new("sehat", "Sehat"),
        Choice::new("penambalan", "Penambalan"),
        Choice::new("pencabutan", "Pencabutan"),
        Choice::new("scaling", "Scaling"),
        Choice::new("rujuk_spesialis", "Rujuk Spesialis"),
        Choice::new("perawatan_rsgm", "perawatan RSGM"),
    ],
};

pub static REKOMENDASI_PERAWATAN: ChoiceSet = ChoiceSet {
    id: "rekom",
    prompt: "Pilih Rekomendasi Perawatan:",
    items: &[
        Choice::new("cabut", "Cabut gigi"),
        Choice::new("saluran_akar", "Perawatan saluran akar"),
        Choice::new("tambal", "Tambal gigi"),
        Choice::new("scalling", "Scalling"),
        Choice::new("odontektomi", "Odontektomi"),
        Choice::new("dhe", "DHE"),
    ],
};

pub static OKLUSI: ChoiceSet = ChoiceSet {
    id: "oklusi",
    prompt: "Pilih Oklusi:",
    items: &[
        Choice::new("normal_bite", "Normal Bite"),
        Choice::new("cross_bite", "Cross Bite"),
        Choice::new("steep_bite", "Steep Bite"),
    ],
};

pub static TORUS_PALATINUS: ChoiceSet = ChoiceSet {
    id: "torusp",
    prompt: "Pilih Torus Palatinus:",
    items: &[
        Choice::new("tidak_ada", "Tidak Ada"),
        Choice::new("kecil", "Kecil"),
        Choice::new("sedang", "Sedang"),
        Choice::new("besar", "Besar"),
        Choice::new("multiple", "Multiple"),
    ],
};

pub static TORUS_MANDIBULARIS: ChoiceSet = ChoiceSet {
    id: "torusm",
    prompt: "Pilih Torus Mandibularis:",
    items: &[
        Choice::new("tidak_ada", "Tidak Ada"),
        Choice::new("kiri", "Kiri"),
        Choice::new("kanan", "Kanan"),
        Choice::new("kedua_sisi", "Kedua Sisi"),
    ],
};

pub static PALATUM: ChoiceSet = ChoiceSet {
    id: "palatum",
    prompt: "Pilih Palatum:",
    items: &[
        Choice::new("dalam", "Dalam"),
        Choice::new("sedang", "Sedang"),
        Choice::new("rendah", "Rendah"),
    ],
};

pub static KONDISI_GIGIGELIGI: ChoiceSet = ChoiceSet {
    id: "kgeligi",
    prompt: "Pilih Kondisi Gigigeligi:",
    items: &[
        Choice::new("berdesakan", "Berdesakan"),
        Choice::new("gigitan_silang", "Gigitan Silang"),
        Choice::new("protusi_anterior", "Protusi Anterior"),
    ],
};

pub static REKOMENDASI_UTAMA: ChoiceSet = ChoiceSet {
    id: "rutama",
    prompt: "Pilih Rekomendasi Perawatan Utama:",
    items: &[
        Choice::new("tambalan", "Tambalan Gigi"),
        Choice::new("saluran_akar", "Perawatan Saluran Akar"),
        Choice::new("pulpektomi", "Indikasi Pulpektomi"),
        Choice::new("cabut", "Cabut Gigi"),
        Choice::new("scalling", "Scalling"),
        Choice::new("odontektomi", "Odontektomi"),
        Choice::new("orto", "Indikasi Orto"),
        Choice::new("dhe", "DHE"),
    ],
};

/// Per-condition metadata the choice set itself does not carry: whether the
/// condition implies a caries location, and the illustration embedded in the
/// persisted row.
#[derive(Debug, Clone, Copy)]
pub struct ConditionMeta {
    /// Stored label, as found in `KONDISI_GIGI`.
    pub label: &'static str,
    pub caries_bearing: bool,
    pub illustration_url: Option<&'static str>,
}

pub static CONDITION_META: &[ConditionMeta] = &[
    ConditionMeta {
        label: "Fraktur",
        caries_bearing: false,
        illustration_url: Some("https://drive.google.com/uc?id=1QmXiaoU7zTGYQZahJHtZCUmBh6Jf0GmW"),
    },
    ConditionMeta {
        label: "Sisa Akar",
        caries_bearing: false,
        illustration_url: Some("https://drive.google.com/uc?id=17pTTa1PKzwZy2AJx78yqR92Jl28E9osm"),
    },
    ConditionMeta {
        label: "Tambalan",
        caries_bearing: false,
        illustration_url: Some("https://drive.google.com/uc?id=1qtzqF_i2xeDgk60fpRM1fOy4YFFJYPOW"),
    },
    ConditionMeta {
        label: "Gigi Hilang",
        caries_bearing: false,
        illustration_url: Some("https://drive.google.com/uc?id=1Pz81FL3CEeDhcDRDbC8u00V1Qb8K0iUR"),
    },
    ConditionMeta {
        label: "Impaksi",
        caries_bearing: false,
        illustration_url: Some("https://drive.google.com/uc?id=1gUuWzdL73Jw1NJDXyse7RDZb4FBg10eC"),
    },
    ConditionMeta {
        label: "Gigi Sehat",
        caries_bearing: false,
        illustration_url: Some("https://drive.google.com/uc?id=1MaUQssH6QWnEoOAL3IOiDQZrmQOaMci4"),
    },
    ConditionMeta {
        label: "Karies",
        caries_bearing: true,
        illustration_url: None,
    },
];

/// Returns true when the stored tooth-condition label implies a caries
/// location must be recorded. Unknown labels do not.
pub fn condition_is_caries_bearing(label: &str) -> bool {
    CONDITION_META
        .iter()
        .any(|m| m.label == label && m.caries_bearing)
}

/// Illustration URL for a stored tooth-condition label, if the catalog has one.
pub fn condition_illustration(label: &str) -> Option<&'static str> {
    CONDITION_META
        .iter()
        .find(|m| m.label == label)
        .and_then(|m| m.illustration_url)
}

/// A caries-location reference card for the read-only gallery command.
#[derive(Debug, Clone, Copy)]
pub struct CariesCard {
    pub key: &'static str,
    pub label: &'static str,
    /// Local image shipped next to the binary.
    pub file: &'static str,
    /// Illustration embedded in the persisted row.
    pub illustration_url: &'static str,
}

pub static CARIES_CARDS: &[CariesCard] = &[
    CariesCard {
        key: "D",
        label: "D-car",
        file: "D-car.jpeg",
        illustration_url:
            "https://drive.google.com/uc?export=view&id=1RUcHKcumJLI33BdEI1NAmYQoRJYnV-hI",
    },
    CariesCard {
        key: "L",
        label: "L-car",
        file: "L-car.jpeg",
        illustration_url:
            "https://drive.google.com/uc?export=view&id=1YqkM3QxMjgAX-jj2ud3DutY8O0CMty5x",
    },
    CariesCard {
        key: "M",
        label: "M-car",
        file: "M-car.jpeg",
        illustration_url:
            "https://drive.google.com/uc?export=view&id=1B0-vG7584zjxlM0EMr3brUC6o-Ma4u-M",
    },
    CariesCard {
        key: "O",
        label: "O-car",
        file: "O-car.jpeg",
        illustration_url:
            "https://drive.google.com/uc?export=view&id=18tO2WkHWCwIUr09oDXY9x0sIQVSBJ2W0",
    },
    CariesCard {
        key: "V",
        label: "V-car",
        file: "V-car.jpeg",
        illustration_url:
            "https://drive.google.com/uc?export=view&id=1qg_M5fEU4NX6vG8vZLyCIo9dC_pTdnPt",
    },
];

/// Looks up a gallery card by its token key.
pub fn caries_card(key: &str) -> Option<&'static CariesCard> {
    CARIES_CARDS.iter().find(|c| c.key == key)
}

/// Illustration URL for a stored caries-location label.
pub fn caries_illustration(label: &str) -> Option<&'static str> {
    CARIES_CARDS
        .iter()
        .find(|c| c.label == label)
        .map(|c| c.illustration_url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn karies_is_the_only_caries_bearing_condition() {
        assert!(condition_is_caries_bearing("Karies"));
        for meta in CONDITION_META.iter().filter(|m| m.label != "Karies") {
            assert!(!condition_is_caries_bearing(meta.label), "{}", meta.label);
        }
    }

    #[test]
    fn unknown_condition_label_is_not_caries_bearing() {
        assert!(!condition_is_caries_bearing("Berlubang"));
    }

    #[test]
    fn every_condition_choice_has_metadata() {
        for choice in KONDISI_GIGI.items {
            assert!(
                CONDITION_META.iter().any(|m| m.label == choice.label),
                "missing metadata for {}",
                choice.label
            );
        }
    }

    #[test]
    fn caries_choices_match_gallery_cards() {
        for choice in LETAK_KARIES.items {
            let card = caries_card(choice.key).expect(choice.key);
            assert_eq!(card.label, choice.label);
        }
    }

    #[test]
    fn karies_condition_has_no_illustration() {
        assert!(condition_illustration("Karies").is_none());
        assert!(condition_illustration("Fraktur").is_some());
    }
}
