use lib::board::{CellKind, Placement};
use std::fmt::{self, Display};

/// Prints an ASCII picture of a [`Placement`].
///
/// The first line pictures the ring, one slot per cell in ring order.
/// An empty start cell shows its owner's letter in lowercase, an occupied
/// cell the resident's letter and figure index, and a crowded cell the
/// resident's letter and a star. One line per player follows, listing
/// where each of their figures stands.
pub struct Ascii<'a>(pub &'a Placement);

fn letter(player: u8) -> char {
    (b'A' + player) as char
}

impl Display for Ascii<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "|")?;

        for cell in &self.0.ring {
            match cell.residents.as_slice() {
                [] => match (cell.kind, cell.owner) {
                    (CellKind::Start, Some(p)) => {
                        write!(f, "{}-|", letter(p.0).to_ascii_lowercase())?
                    }
                    _ => write!(f, "--|")?,
                },
                [figure] => write!(f, "{}{}|", letter(figure.player.0), figure.index % 10)?,
                [figure, ..] => write!(f, "{}*|", letter(figure.player.0))?,
            }
        }

        for (p, spots) in self.0.figures.iter().enumerate() {
            write!(f, "\n{}: ", letter(p as u8))?;

            for (i, spot) in spots.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }

                write!(f, "{}", spot)?;
            }
        }

        Ok(())
    }
}
