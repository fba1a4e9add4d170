use crate::*;

impl Board {
    /// Flip the flag on a hidden cell. Revealed cells cannot carry a flag, so
    /// toggling one reports [`MarkOutcome::NoChange`].
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        use MarkOutcome::*;

        let coords = self.validate_coords(coords)?;
        let cell = self.cell_mut(coords);

        if cell.is_revealed {
            return Ok(NoChange);
        }

        cell.is_flagged = !cell.is_flagged;
        if cell.is_flagged {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }
        log::debug!("Toggled flag at {:?}, flags: {}", coords, self.flagged_count);

        Ok(Changed)
    }
}
