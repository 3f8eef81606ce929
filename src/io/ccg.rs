/*!
Reading atom pools from constraint-graph files.

Of a constraint-graph file only atom mappings are read.
An atom mapping is a line beginning `c ` whose last space-separated token is the identifier of some atom, e.g.

```text
c 1 5
```

maps the first atom to `5`.
All other lines are ignored, without any check on their form.
*/

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    misc::log::targets::{self},
    structures::atom::{Atom, AtomPool},
    types::err::{self, ErrorKind},
};

/// The marker which begins an atom mapping.
pub const MAPPING_MARKER: &str = "c ";

/// Reads the atom mappings of a constraint-graph file to an [AtomPool].
///
/// The pool contains each identifier in the order read, with repetition.
///
/// ```rust
/// # use ccg_assumptions::io::ccg::read_atom_pool;
/// let ccg = b"c 1 5\nc 2 7\nx foo\n";
/// assert_eq!(read_atom_pool(ccg.as_slice()), Ok(vec![5, 7]));
/// ```
pub fn read_atom_pool(mut reader: impl BufRead) -> Result<AtomPool, ErrorKind> {
    let mut pool = AtomPool::default();
    let mut buffer = String::with_capacity(256);
    let mut line_counter = 0;

    loop {
        buffer.clear();
        match reader.read_line(&mut buffer) {
            Ok(0) => break,
            Ok(_) => line_counter += 1,
            Err(e) => return Err(err::ReadError::Line(line_counter + 1, e.kind()).into()),
        }

        let Some(mapping) = buffer.strip_prefix(MAPPING_MARKER) else {
            continue;
        };

        // Tokens are split on single spaces, so a trailing space leaves an empty last token.
        let token = match mapping.rsplit_once(' ') {
            Some((_, last)) => last,
            None => mapping,
        }
        .trim();

        match token.parse::<Atom>() {
            Ok(atom) => pool.push(atom),
            Err(_) => {
                log::error!(target: targets::PARSE, "Line {line_counter} is not an atom mapping: {buffer:?}");
                return Err(err::ParseError::AtomMapping(line_counter, token.to_string()).into());
            }
        }
    }

    log::info!(target: targets::PARSE, "Read {} atom mappings from {line_counter} lines", pool.len());
    Ok(pool)
}

/// Reads the atom mappings of the constraint-graph file at `path`.
pub fn read_atom_pool_at(path: &Path) -> Result<AtomPool, ErrorKind> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => return Err(err::ReadError::FailedToOpen(e.kind()).into()),
    };

    read_atom_pool(BufReader::new(file))
}
