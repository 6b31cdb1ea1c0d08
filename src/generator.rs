//! Templated synthetic reviews.
//!
//! Phrase choice is driven by a ChaCha8 generator seeded with the driver id and
//! owned by the single `generate` call, so a given id always yields the same
//! text regardless of call order, threads or restarts.

use crate::drivers::Driver;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

pub const SERVICE_PHRASES: [&str; 5] = [
    "Their communication was clear and timely.",
    "The vehicle was well-maintained and clean.",
    "Punctuality was excellent, arriving right on schedule.",
    "The driving was smooth and comfortable throughout the journey.",
    "Very professional attitude and appearance.",
];

const SERVICE_PHRASES_PER_REVIEW: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedReview {
    pub driver_id: i64,
    pub driver_name: String,
    pub text: String,
}

pub fn experience_phrases(driver: &Driver) -> [String; 3] {
    let (name, years) = (&driver.name, driver.experience_years);
    [
        format!("The driver has {years} years of experience which shows in their driving style."),
        format!("With {years} years on the road, {name} handles the vehicle confidently."),
        format!("{name}'s {years} years of experience translates to a smooth ride."),
    ]
}

pub fn generate_review(driver: &Driver) -> GeneratedReview {
    let mut rng = ChaCha8Rng::seed_from_u64(driver.id as u64);

    let experience = experience_phrases(driver);
    let pick = rng.gen_range(0..experience.len());

    let mut parts = Vec::with_capacity(1 + SERVICE_PHRASES_PER_REVIEW);
    parts.push(experience[pick].as_str());
    parts.extend(
        SERVICE_PHRASES
            .choose_multiple(&mut rng, SERVICE_PHRASES_PER_REVIEW)
            .copied(),
    );

    tracing::debug!(driver_id = driver.id, experience_phrase = pick, "generated review");

    GeneratedReview {
        driver_id: driver.id,
        driver_name: driver.name.clone(),
        text: parts.join(" "),
    }
}
