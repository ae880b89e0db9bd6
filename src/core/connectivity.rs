use crate::core::structure::Structure;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::Bfs;

/// Represents the connectivity of atoms within a structure.
/// Used to verify that the bond list describes exactly one molecule.
pub struct BondGraph {
    /// Undirected graph where nodes are atom indices and edges represent bonds.
    pub graph: UnGraph<usize, ()>,
}

impl BondGraph {
    /// Builds the connectivity graph from the structure's explicit bond list.
    /// Every atom becomes a node, so atoms without any bond show up as
    /// isolated components rather than disappearing from the graph.
    pub fn from_structure(structure: &Structure) -> Self {
        let num_atoms = structure.atoms.len();
        let mut graph = UnGraph::<usize, ()>::with_capacity(num_atoms, structure.bonds.len());

        // Add all nodes first to maintain index mapping
        let node_indices: Vec<NodeIndex> = (0..num_atoms).map(|i| graph.add_node(i)).collect();

        for bond in &structure.bonds {
            if bond.a < num_atoms && bond.b < num_atoms {
                graph.add_edge(node_indices[bond.a], node_indices[bond.b], ());
            }
        }
        Self { graph }
    }

    /// Finds all connected components in the graph.
    /// Returns a list of vectors, where each vector contains the atom indices of a molecule.
    pub fn find_connected_components(&self) -> Vec<Vec<usize>> {
        let mut visited = vec![false; self.graph.node_count()];
        let mut all_components = Vec::new();

        for i in 0..self.graph.node_count() {
            if !visited[i] {
                let mut component = Vec::new();
                let start_node = NodeIndex::new(i);

                let mut bfs = Bfs::new(&self.graph, start_node);
                while let Some(nx) = bfs.next(&self.graph) {
                    let atom_index = self.graph[nx]; // The payload of the node
                    if !visited[atom_index] {
                        visited[atom_index] = true;
                        component.push(atom_index);
                    }
                }

                // Sort for determinism
                component.sort_unstable();
                if !component.is_empty() {
                    all_components.push(component);
                }
            }
        }
        all_components
    }

    /// True when the bond list joins every atom into a single molecule.
    /// An empty structure is not a molecule; neither is one whose bonds leave
    /// any atom unreachable (zero bonds on two or more atoms included).
    pub fn is_single_molecule(&self) -> bool {
        self.graph.node_count() > 0 && self.find_connected_components().len() == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::structure::Atom;
    use nalgebra::Vector3;

    fn bare_atom(name: &str) -> Atom {
        Atom {
            name: name.to_string(),
            element: name.trim_end_matches(char::is_numeric).to_string(),
            position: Vector3::zeros(),
            atom_type: name.to_string(),
            partial_charge: 0.0,
            subst_id: 1,
            subst_name: "MOL".to_string(),
        }
    }

    fn chain(n: usize, bonded: bool) -> Structure {
        let mut s = Structure::new("chain");
        for i in 0..n {
            s.add_atom(bare_atom(&format!("C{}", i + 1)));
        }
        if bonded {
            for i in 1..n {
                s.add_bond(i - 1, i, "1");
            }
        }
        s
    }

    #[test]
    fn bonded_chain_is_single_molecule() {
        let graph = BondGraph::from_structure(&chain(4, true));
        assert!(graph.is_single_molecule());
        assert_eq!(graph.find_connected_components().len(), 1);
    }

    #[test]
    fn missing_bonds_split_the_graph() {
        let mut s = chain(4, true);
        s.bonds.remove(1); // break the chain in the middle
        let graph = BondGraph::from_structure(&s);
        assert!(!graph.is_single_molecule());
        assert_eq!(graph.find_connected_components().len(), 2);
    }

    #[test]
    fn atoms_without_any_bond_are_isolated_components() {
        let graph = BondGraph::from_structure(&chain(3, false));
        assert_eq!(graph.find_connected_components().len(), 3);
        assert!(!graph.is_single_molecule());
    }

    #[test]
    fn lone_atom_is_trivially_connected() {
        let graph = BondGraph::from_structure(&chain(1, false));
        assert!(graph.is_single_molecule());
    }

    #[test]
    fn empty_structure_is_not_a_molecule() {
        let graph = BondGraph::from_structure(&Structure::new("empty"));
        assert!(!graph.is_single_molecule());
    }
}
