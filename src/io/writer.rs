use crate::core::structure::Structure;
use crate::io::error::Mol2Error;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Writes the structure as a TRIPOS MOL2 file.
pub fn to_mol2(structure: &Structure, path: &Path) -> Result<(), Mol2Error> {
    fs::write(path, write_mol2(structure)).map_err(|source| Mol2Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Renders the structure as MOL2 text.
///
/// Ids are 1-indexed per the format; the charge-type line reflects whether
/// any atom actually carries a partial charge.
pub fn write_mol2(structure: &Structure) -> String {
    let mut out = String::new();

    writeln!(out, "@<TRIPOS>MOLECULE").ok();
    writeln!(
        out,
        "{}",
        if structure.name.is_empty() {
            "molecule"
        } else {
            &structure.name
        }
    )
    .ok();

    let n_subst = structure
        .atoms
        .iter()
        .map(|a| a.subst_id)
        .max()
        .unwrap_or(1)
        .max(1);
    writeln!(
        out,
        " {} {} {} 0 0",
        structure.atoms.len(),
        structure.bonds.len(),
        n_subst
    )
    .ok();
    writeln!(out, "SMALL").ok();

    let has_charges = structure.atoms.iter().any(|a| a.partial_charge != 0.0);
    writeln!(
        out,
        "{}",
        if has_charges {
            "USER_CHARGES"
        } else {
            "NO_CHARGES"
        }
    )
    .ok();
    writeln!(out).ok();

    writeln!(out, "@<TRIPOS>ATOM").ok();
    for (idx, atom) in structure.atoms.iter().enumerate() {
        writeln!(
            out,
            "{:7} {:<8} {:10.4} {:10.4} {:10.4} {:<8} {:3} {:<8} {:8.4}",
            idx + 1,
            atom.name,
            atom.position.x,
            atom.position.y,
            atom.position.z,
            atom.atom_type,
            atom.subst_id.max(1),
            atom.subst_name,
            atom.partial_charge
        )
        .ok();
    }

    writeln!(out, "@<TRIPOS>BOND").ok();
    for (idx, bond) in structure.bonds.iter().enumerate() {
        writeln!(
            out,
            "{:6} {:5} {:5} {}",
            idx + 1,
            bond.a + 1,
            bond.b + 1,
            bond.order
        )
        .ok();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::structure::Atom;
    use crate::io::parser;
    use nalgebra::Vector3;

    fn water() -> Structure {
        let mut s = Structure::new("water");
        for (name, pos) in [
            ("O1", Vector3::new(0.0, 0.0, 0.0)),
            ("H1", Vector3::new(0.96, 0.0, 0.0)),
            ("H2", Vector3::new(-0.24, 0.93, 0.0)),
        ] {
            s.add_atom(Atom {
                name: name.to_string(),
                element: name[..1].to_string(),
                position: pos,
                atom_type: name[..1].to_string(),
                partial_charge: 0.0,
                subst_id: 1,
                subst_name: "HOH".to_string(),
            });
        }
        s.add_bond(0, 1, "1");
        s.add_bond(0, 2, "1");
        s
    }

    #[test]
    fn emits_all_sections() {
        let text = write_mol2(&water());
        assert!(text.contains("@<TRIPOS>MOLECULE"));
        assert!(text.contains("water"));
        assert!(text.contains(" 3 2 1 0 0"));
        assert!(text.contains("NO_CHARGES"));
        assert!(text.contains("@<TRIPOS>ATOM"));
        assert!(text.contains("@<TRIPOS>BOND"));
    }

    #[test]
    fn written_text_parses_back() {
        let original = water();
        let parsed = parser::parse_mol2(&write_mol2(&original)).expect("writer output must parse");
        assert_eq!(parsed.atoms.len(), original.atoms.len());
        assert_eq!(parsed.bonds.len(), original.bonds.len());
        assert_eq!(parsed.atoms[1].name, "H1");
        assert_eq!(parsed.bonds[1].b, 2);
    }

    #[test]
    fn charged_atoms_switch_the_charge_type_line() {
        let mut s = water();
        s.atoms[0].partial_charge = -0.83;
        assert!(write_mol2(&s).contains("USER_CHARGES"));
    }
}
