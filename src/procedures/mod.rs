/*!
Procedures of a run.

A run [scans](scan) a directory for constraint-graph files and, in order, [generates](generate) a route for each file.
Generating a route reads an [atom pool](crate::io::ccg), [samples](sample) a route from the pool, and [writes](crate::io::route) the route.
*/

pub mod generate;
pub mod sample;
pub mod scan;
