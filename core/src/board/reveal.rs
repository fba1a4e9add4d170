use std::collections::VecDeque;

use crate::*;

impl Board {
    /// Reveal a hidden, unflagged cell, opening the surrounding zero region
    /// when it has no adjacent mines.
    ///
    /// Revealing a mine marks it revealed and stops there; the caller decides
    /// what losing means.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use RevealOutcome::*;

        let coords = self.validate_coords(coords)?;
        let cell = self[coords];

        if cell.is_revealed() || cell.is_flagged() {
            return Ok(NoOp);
        }

        self.mark_revealed(coords);

        if cell.is_mine() {
            log::debug!("Revealed mine at {:?}", coords);
            return Ok(HitMine);
        }

        log::debug!(
            "Revealed cell at {:?}, mine count: {}",
            coords,
            cell.adjacent_mine_count()
        );
        if cell.adjacent_mine_count() == 0 {
            self.cascade_from(coords);
        }

        Ok(Revealed)
    }

    /// Flood-fill from an already revealed zero cell.
    ///
    /// `is_revealed` doubles as the visited marker: a cell is marked before it
    /// is queued, so every cell enters the worklist at most once.
    fn cascade_from(&mut self, origin: Coord2) {
        let mut to_visit = VecDeque::from([origin]);

        while let Some(visit_coords) = to_visit.pop_front() {
            for pos in self.neighbors(visit_coords) {
                let neighbor = self[pos];

                // skip flagged, opened and mined cells
                if neighbor.is_revealed() || neighbor.is_flagged() || neighbor.is_mine() {
                    continue;
                }

                self.mark_revealed(pos);
                log::trace!(
                    "Flood opened cell at {:?}, mine count: {}",
                    pos,
                    neighbor.adjacent_mine_count()
                );

                // numbered cells form the edge of the cascade
                if neighbor.adjacent_mine_count() == 0 {
                    to_visit.push_back(pos);
                }
            }
        }
    }
}
