use trivia_types::{Tile, TileFlipTracker};

/// Increment the counter named by a raw tile identifier.
/// Empty or unrecognized identifiers leave the tracker untouched.
pub fn increment(tracker: &mut TileFlipTracker, tile_id: &str) {
    if tile_id.is_empty() {
        return;
    }

    match tile_id.parse::<Tile>() {
        Ok(tile) => increment_tile(tracker, tile),
        Err(_) => tracing::warn!("Ignoring unknown tile identifier '{}'", tile_id),
    }
}

pub fn increment_tile(tracker: &mut TileFlipTracker, tile: Tile) {
    *tracker.count_mut(tile) += 1;
}

/// The tile with the strictly highest count; the earliest tile in
/// enumeration order wins ties. `None` when nothing has been flipped.
pub fn most_common(tracker: &TileFlipTracker) -> Option<Tile> {
    let mut best: Option<(Tile, u32)> = None;
    for (tile, count) in tracker.counts() {
        if count == 0 {
            continue;
        }
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((tile, count)),
        }
    }
    best.map(|(tile, _)| tile)
}

/// The tile with the lowest count across every category, including tiles
/// that were never flipped. The earliest tile in enumeration order wins ties,
/// so a never-flipped tile is usually the answer.
pub fn least_common(tracker: &TileFlipTracker) -> Option<Tile> {
    let mut best: Option<(Tile, u32)> = None;
    for (tile, count) in tracker.counts() {
        match best {
            Some((_, best_count)) if count >= best_count => {}
            _ => best = Some((tile, count)),
        }
    }
    best.map(|(tile, _)| tile)
}
