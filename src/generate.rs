use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use log::{debug, info};
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::Atom;

/// Write `count` random atom records, each terminated by `\n`.
pub fn write_atoms(writer: &mut impl Write, count: usize, rng: &mut impl Rng) -> io::Result<()> {
    for _ in 0..count {
        writeln!(writer, "{}", Atom::random(rng))?;
    }
    Ok(())
}

/// Create or truncate `path` and fill it with `count` random atom records.
///
/// Errors from the filesystem are returned as is. Whatever was written before
/// a failure stays on disk.
pub fn generate_file_with(path: &Path, count: usize, rng: &mut impl Rng) -> io::Result<()> {
    info!("writing {} atoms to {}", count, path.display());
    let mut outfile = BufWriter::with_capacity(128 * 1024, File::create(path)?);
    write_atoms(&mut outfile, count, rng)?;
    outfile.flush()?;
    info!("done writing {}", path.display());
    Ok(())
}

pub fn generate_file(path: &Path, count: usize) -> io::Result<()> {
    debug!("seeding rng from entropy");
    let mut rng = SmallRng::from_entropy();
    generate_file_with(path, count, &mut rng)
}
