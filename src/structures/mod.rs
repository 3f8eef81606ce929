/*!
Abstract structures of a run.

- An [atom](atom::Atom) is an integer identifier read from a constraint-graph file.
- An [atom pool](atom::AtomPool) is the sequence of identifiers read from a single file, in order and with repetition.
- An [assumption](assumption::Assumption) is an atom together with a polarity.
- A [route](route::Route) is the sequence of assumptions drawn for a single file.
*/

pub mod assumption;
pub mod atom;
pub mod route;
