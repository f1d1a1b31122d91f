// src/generators/password.rs
use std::sync::{Arc, Mutex};
use rand::rngs::{OsRng, SmallRng};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::generators::charset::{self, CharacterClass};
use crate::generators::shuffle;
use crate::generators::strength;
use crate::models::{PasswordGenerationOptions, RngSource, ShuffleMode};

/// Clones share the seeded stream, so every API worker keeps drawing from
/// the same reproducible sequence instead of restarting it.
#[derive(Debug, Clone, Default)]
pub struct PasswordGenerator {
    rng_source: RngSource,
    shuffle_mode: ShuffleMode,
    seeded: Option<Arc<Mutex<ChaCha20Rng>>>,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator::default()
    }

    pub fn with_rng_source(mut self, rng_source: RngSource) -> Self {
        self.rng_source = rng_source;
        self.seeded = match rng_source {
            RngSource::Seeded(seed) => Some(Arc::new(Mutex::new(ChaCha20Rng::seed_from_u64(seed)))),
            _ => None,
        };
        self
    }

    pub fn with_shuffle_mode(mut self, shuffle_mode: ShuffleMode) -> Self {
        self.shuffle_mode = shuffle_mode;
        self
    }

    pub fn rng_source(&self) -> RngSource {
        self.rng_source
    }

    pub fn shuffle_mode(&self) -> ShuffleMode {
        self.shuffle_mode
    }

    pub fn generate_password(&self, options: &PasswordGenerationOptions) -> String {
        match self.rng_source {
            RngSource::Os => generate_with_rng(options, self.shuffle_mode, &mut OsRng),
            RngSource::Thread => generate_with_rng(options, self.shuffle_mode, &mut rand::thread_rng()),
            RngSource::Fast => generate_with_rng(options, self.shuffle_mode, &mut SmallRng::from_entropy()),
            RngSource::Seeded(seed) => match &self.seeded {
                Some(stream) => {
                    // A panic mid-generation leaves the stream usable
                    let mut rng = stream.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                    generate_with_rng(options, self.shuffle_mode, &mut *rng)
                }
                None => generate_with_rng(options, self.shuffle_mode, &mut ChaCha20Rng::seed_from_u64(seed)),
            },
        }
    }

    pub fn analyze_password_strength(&self, password: &str) -> u8 {
        strength::score(password)
    }
}

/// Classes switched on in `options`, in charset order.
pub fn enabled_classes(options: &PasswordGenerationOptions) -> Vec<CharacterClass> {
    CharacterClass::ALL
        .into_iter()
        .filter(|class| match class {
            CharacterClass::Uppercase => options.include_uppercase,
            CharacterClass::Lowercase => options.include_lowercase,
            CharacterClass::Number => options.include_numbers,
            CharacterClass::Symbol => options.include_symbols,
        })
        .collect()
}

/// Generates a password of exactly `options.length` characters.
///
/// One character from each enabled class is placed first, in class order,
/// until the requested length is reached; so with a length shorter than the
/// number of enabled classes the later classes are not represented. The rest
/// is drawn from the combined charset and the whole is shuffled.
pub fn generate_with_rng<R: Rng + ?Sized>(
    options: &PasswordGenerationOptions,
    shuffle_mode: ShuffleMode,
    rng: &mut R,
) -> String {
    let classes = enabled_classes(options);
    let charset = charset::build_charset(&classes, options.exclude_similar);

    let mut password: Vec<char> = Vec::with_capacity(options.length);

    for class in &classes {
        if password.len() >= options.length {
            break;
        }
        let pool = charset::class_chars(*class, options.exclude_similar);
        if let Some(c) = pick(&pool, rng) {
            password.push(c);
        }
    }

    while password.len() < options.length {
        match pick(&charset, rng) {
            Some(c) => password.push(c),
            None => break,
        }
    }

    shuffle::shuffle(&mut password, shuffle_mode, rng);
    password.into_iter().collect()
}

fn pick<R: Rng + ?Sized>(pool: &[char], rng: &mut R) -> Option<char> {
    if pool.is_empty() {
        return None;
    }
    Some(pool[rng.gen_range(0..pool.len())])
}
