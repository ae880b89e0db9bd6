// ============================================================================
// MODULE DECLARATIONS
// ============================================================================
pub mod core;
pub mod io;
pub mod typing;

// ============================================================================
// RE-EXPORTS (Public API)
// ============================================================================
pub use crate::core::connectivity::BondGraph;
pub use crate::core::structure::{Atom, Bond, Structure};
pub use crate::io::{parser, writer};

pub use crate::typing::convert::{DirectConverter, Fragment, FragmentAtom, FragmentConverter, TypingInput};
pub use crate::typing::error::TypingError;
pub use crate::typing::style::{AtomTypeStyle, SUPPORTED_STYLES};
pub use crate::typing::tools::Antechamber;
pub use crate::typing::typer::{AtomTyper, TypingRequest};

// ============================================================================
// HIGH-LEVEL INTERFACE
// ============================================================================

/// Assigns atom types to a structure by round-tripping it through the
/// antechamber executable found on the search path.
///
/// One-call surface over [`AtomTyper`]: discovers the tool, validates the
/// molecule, runs the external typing pass in a scoped temporary directory
/// and returns a new structure with the per-atom type labels filled in.
pub fn assign_atom_types(
    structure: &Structure,
    request: &TypingRequest,
) -> Result<Structure, TypingError> {
    AtomTyper::discover()?.assign_atom_types(TypingInput::Structure(structure), request)
}
