use nalgebra::Vector3;

use crate::core::structure::{Atom, Structure};
use crate::typing::error::TypingError;

/// A bare coordinate fragment: the alternate input representation.
///
/// Carries only elements, positions and an index-pair bond list; no names,
/// charges or residue metadata. It must pass through a converter before the
/// bridge can serialize it.
#[derive(Debug, Clone)]
pub struct Fragment {
    pub atoms: Vec<FragmentAtom>,
    pub bonds: Vec<(usize, usize)>,
}

#[derive(Debug, Clone)]
pub struct FragmentAtom {
    pub element: String,
    pub position: Vector3<f64>,
}

/// The two input kinds the bridge accepts.
pub enum TypingInput<'a> {
    Structure(&'a Structure),
    Fragment(&'a Fragment),
}

impl TypingInput<'_> {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            TypingInput::Structure(_) => "structure",
            TypingInput::Fragment(_) => "fragment",
        }
    }
}

impl<'a> From<&'a Structure> for TypingInput<'a> {
    fn from(structure: &'a Structure) -> Self {
        TypingInput::Structure(structure)
    }
}

impl<'a> From<&'a Fragment> for TypingInput<'a> {
    fn from(fragment: &'a Fragment) -> Self {
        TypingInput::Fragment(fragment)
    }
}

/// Capability for turning a `Fragment` into the canonical `Structure`.
///
/// Registered on the bridge as an optional adapter; when absent, fragment
/// inputs are rejected instead of guessed at.
pub trait FragmentConverter {
    fn convert(&self, fragment: &Fragment) -> Result<Structure, TypingError>;
}

/// Field-for-field converter for fragments that already carry bonds.
///
/// Atom names are generated as element + 1-based index ("C1", "H4"); charges
/// start at zero and all atoms land in a single "MOL" substructure. Types are
/// seeded with the element symbol, which antechamber overwrites anyway.
pub struct DirectConverter;

impl FragmentConverter for DirectConverter {
    fn convert(&self, fragment: &Fragment) -> Result<Structure, TypingError> {
        let mut structure = Structure::new("fragment");
        for (i, atom) in fragment.atoms.iter().enumerate() {
            structure.add_atom(Atom {
                name: format!("{}{}", atom.element, i + 1),
                element: atom.element.clone(),
                position: atom.position,
                atom_type: atom.element.clone(),
                partial_charge: 0.0,
                subst_id: 1,
                subst_name: "MOL".to_string(),
            });
        }
        for &(a, b) in &fragment.bonds {
            structure.add_bond(a, b, "1");
        }
        Ok(structure)
    }
}
