use trivia_types::{PlayResult, Stats};

use crate::tiles;

pub struct StatsAggregator;

impl StatsAggregator {
    /// Fold one result into a running aggregate.
    pub fn apply_result(stats: &mut Stats, result: &PlayResult) {
        stats.total_plays += 1;
        let total_plays = stats.total_plays as f64;

        // The number of correct plays is not persisted; it is recovered from the
        // previous percentage. Floating point error can make this land one below
        // the true count when the product is not exactly representable.
        let mut correct_count =
            (stats.percentage_correct * (total_plays - 1.0) / 100.0).floor() as u32;

        if result.is_correct {
            correct_count += 1;
            let n = correct_count as f64;
            stats.average_correct_score =
                (stats.average_correct_score * (n - 1.0) + result.score as f64) / n;
        }

        // Recomputed on every result; a miss is not left frozen at the old
        // percentage, it pulls it down
        stats.percentage_correct = correct_count as f64 * 100.0 / total_plays;

        stats.highest_score = stats.highest_score.max(result.score);

        stats.average_incorrect_guesses = running_mean(
            stats.average_incorrect_guesses,
            result.incorrect_guesses as f64,
            total_plays,
        );
        stats.average_number_of_tile_flips = running_mean(
            stats.average_number_of_tile_flips,
            result.flipped_tiles.len() as f64,
            total_plays,
        );

        let flips = &result.flipped_tiles;
        if let (Some(first), Some(last)) = (flips.first(), flips.last()) {
            tiles::increment(&mut stats.first_tile_flipped, first);
            tiles::increment(&mut stats.last_tile_flipped, last);
            for tile in flips {
                tiles::increment(&mut stats.all_tiles_flipped, tile);
            }

            stats.most_common_first_tile = tiles::most_common(&stats.first_tile_flipped);
            stats.most_common_last_tile = tiles::most_common(&stats.last_tile_flipped);
            stats.most_common_tile = tiles::most_common(&stats.all_tiles_flipped);
            stats.least_common_tile = tiles::least_common(&stats.all_tiles_flipped);
        }

        tracing::debug!(
            "Applied result (score {}, correct {}) - {} plays, {:.2}% correct",
            result.score,
            result.is_correct,
            stats.total_plays,
            stats.percentage_correct
        );
    }
}

fn running_mean(previous: f64, sample: f64, count: f64) -> f64 {
    (previous * (count - 1.0) + sample) / count
}
