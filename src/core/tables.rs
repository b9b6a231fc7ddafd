// src/core/tables.rs
use crate::core::types::{CodepointGroup, LONG_A_SIGN, SUPPRESSOR};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Hand-authored consonants in derivation order. Multi-codepoint entries are
/// conjuncts; `Nepala` is a whole-word irregular form.
const CONSONANTS: &[(&str, &str)] = &[
    ("ba", "2348"),
    ("bha", "2349"),
    ("ca", "2325"),
    ("cha", "2330"),
    ("chha", "2331"),
    ("Da", "2337"),
    ("da", "2342"),
    ("dha", "2343"),
    ("Dha", "2338"),
    ("fa", "2347"),
    ("ga", "2327"),
    ("gha", "2328"),
    ("gya", "2332+2381+2334"),
    ("ha", "2361"),
    ("ja", "2332"),
    ("jha", "2333"),
    ("ka", "2325"),
    ("kha", "2326"),
    ("ksha", "2325+2381+2359"),
    ("la", "2354"),
    ("ma", "2350"),
    ("Na", "2339"),
    ("na", "2344"),
    ("Nepala", "2344+2375+2346+2366+2354"),
    ("nga", "2329"),
    ("pa", "2346"),
    ("pha", "2347"),
    ("qa", "2325"),
    ("ra", "2352"),
    ("sa", "2360"),
    ("sha", "2358"),
    ("Sha", "2359"),
    ("ta", "2340"),
    ("Ta", "2335"),
    ("Tha", "2336"),
    ("tha", "2341"),
    ("va", "2357"),
    ("wa", "2357"),
    ("xa", "2325+2381+2360"),
    ("ya", "2351"),
    ("yna", "2334"),
    ("za", "2332"),
];

/// Independent vowels, digits, punctuation and irregular signs. These are
/// written before derivation so the generated forms never replace them.
const LITERALS: &[(&str, &str)] = &[
    ("*", "2306"),
    ("**", "2305"),
    (".", "2404"),
    ("\\", "2381"),
    ("0", "2406"),
    ("1", "2407"),
    ("2", "2408"),
    ("3", "2409"),
    ("4", "2410"),
    ("5", "2411"),
    ("6", "2412"),
    ("7", "2413"),
    ("8", "2414"),
    ("9", "2415"),
    ("a", "2309"),
    ("aa", "2310"),
    ("ai", "2320"),
    ("am", "2309+2381"),
    ("au", "2324"),
    ("aum", "2384"),
    ("e", "2319"),
    ("i", "2311"),
    ("ii", "2312"),
    ("o", "2323"),
    ("om", "2384"),
    ("oo", "2314"),
    ("ri^", "2381+2352+2367+"),
    ("rr", "2352+2381+8205"),
    ("rree", "2400"),
    ("rri", "2315"),
    ("u", "2313"),
];

/// Vowel-sign suffixes appended to a consonant stem (the consonant minus its
/// trailing `a`), with the sign each one attaches.
const VOWEL_SIGNS: &[(&str, u32)] = &[
    ("i", 2367),
    ("ee", 2368),
    ("u", 2369),
    ("oo", 2370),
    ("ri", 2371),
    ("e", 2375),
    ("ai", 2376),
    ("o", 2379),
    ("au", 2380),
];

/// The immutable phoneme tables. Built once, then shared by reference.
#[derive(Debug, Clone)]
pub struct PhonemeTables {
    consonants: HashMap<String, CodepointGroup>,
    units: HashMap<String, CodepointGroup>,
    /// Longest key, in chars. Bounds how far the tokenizer has to look ahead.
    max_key_chars: usize,
}

impl PhonemeTables {
    /// Process-wide tables, built on first use.
    pub fn global() -> &'static PhonemeTables {
        static INSTANCE: OnceLock<PhonemeTables> = OnceLock::new();
        INSTANCE.get_or_init(PhonemeTables::build)
    }

    /// Builds the consonant table and derives the full unit table from it.
    pub fn build() -> Self {
        let consonants: HashMap<String, CodepointGroup> = CONSONANTS
            .iter()
            .map(|&(roman, group)| (roman.to_string(), group.to_string()))
            .collect();

        let mut units: HashMap<String, CodepointGroup> = HashMap::new();
        for &(roman, group) in LITERALS {
            insert_absent(&mut units, roman.to_string(), group.to_string());
        }

        for &(conso, group) in CONSONANTS {
            insert_absent(&mut units, conso.to_string(), group.to_string());
            insert_absent(&mut units, format!("{conso}a"), with_sign(group, LONG_A_SIGN));

            let stem = conso.strip_suffix('a').unwrap_or(conso);
            for &(suffix, sign) in VOWEL_SIGNS {
                insert_absent(&mut units, format!("{stem}{suffix}"), with_sign(group, sign));
            }
            insert_absent(&mut units, stem.to_string(), with_sign(group, SUPPRESSOR));
        }

        let max_key_chars = units.keys().map(|k| k.chars().count()).max().unwrap_or(1);
        tracing::debug!(units = units.len(), consonants = consonants.len(), "phoneme tables built");

        Self { consonants, units, max_key_chars }
    }

    pub fn consonants(&self) -> &HashMap<String, CodepointGroup> {
        &self.consonants
    }

    pub fn units(&self) -> &HashMap<String, CodepointGroup> {
        &self.units
    }

    pub fn get(&self, roman: &str) -> Option<&str> {
        self.units.get(roman).map(String::as_str)
    }

    pub fn max_key_chars(&self) -> usize {
        self.max_key_chars
    }
}

/// First write wins: an existing entry is never replaced.
fn insert_absent(table: &mut HashMap<String, CodepointGroup>, key: String, value: CodepointGroup) {
    table.entry(key).or_insert(value);
}

fn with_sign(group: &str, sign: u32) -> CodepointGroup {
    format!("{group}+{sign}")
}
