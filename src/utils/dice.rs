use log::debug;
use rand::Rng;

use crate::utils::constants::DIE_FACES;

/// Roll `count` six-sided dice with the provided RNG
pub fn roll_dice<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<u64> {
    let dice: Vec<u64> = (0..count).map(|_| rng.gen_range(1..=DIE_FACES)).collect();
    debug!("Rolled {:?}", dice);
    dice
}
