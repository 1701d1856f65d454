//! Whitespace-separated plain-text layout.
//!
//! Every container is written as its extents on one line followed by the
//! elements in row-major order:
//!
//! ```text
//! Array1        Grid (both origins)     Volume
//! 3             2 3                     2 2 2
//! 1             1 2 3                   1 2
//! 2             4 5 6                   3 4
//! 3
//!                                       5 6
//!                                       7 8
//!
//! ```
//!
//! Grid and volume rows carry a trailing space after every element. Reading
//! ignores line structure entirely and only looks at tokens.
use std::fmt::{self, Display};
use std::io::{self, BufRead, ErrorKind, Write};
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

use crate::math::dense::Origin;
use crate::math::{Array1, Grid, Volume};

/// Containers that can be written to and read back from the text layout.
pub trait TextFormat: Sized {
    fn write_text<W: Write>(&self, writer: &mut W) -> io::Result<()>;

    /// Read one container, consuming exactly the tokens that belong to it.
    fn read_text<R: BufRead>(reader: &mut R) -> Result<Self>;

    /// Read one container and replace `target` with it. `target` is left
    /// untouched if reading fails part way.
    fn read_into<R: BufRead>(reader: &mut R, target: &mut Self) -> Result<()> {
        *target = Self::read_text(reader)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// tokenizer

/// Pull the next whitespace-delimited token, leaving the delimiter that ends
/// it in the reader. Returns `None` at end of input.
fn next_token<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut token = Vec::new();
    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }

        let mut used = 0;
        let mut done = false;
        for &byte in buf {
            if byte.is_ascii_whitespace() {
                if token.is_empty() {
                    used += 1;
                    continue;
                }
                done = true;
                break;
            }
            token.push(byte);
            used += 1;
        }
        reader.consume(used);
        if done {
            break;
        }
    }

    if token.is_empty() {
        return Ok(None);
    }
    String::from_utf8(token)
        .map(Some)
        .map_err(|e| io::Error::new(ErrorKind::InvalidData, e))
}

struct Tokens<'r, R> {
    reader: &'r mut R,
    consumed: usize,
}

impl<'r, R: BufRead> Tokens<'r, R> {
    fn new(reader: &'r mut R) -> Self {
        Self {
            reader,
            consumed: 0,
        }
    }

    fn next_value<T>(&mut self, what: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let token = next_token(self.reader)
            .with_context(|| format!("Failed to read {} (token {})", what, self.consumed + 1))?
            .ok_or_else(|| {
                io::Error::new(
                    ErrorKind::UnexpectedEof,
                    format!("input ended before {} (token {})", what, self.consumed + 1),
                )
            })?;
        self.consumed += 1;
        token
            .parse::<T>()
            .map_err(|e| anyhow!("Invalid {} {:?} at token {}: {}", what, token, self.consumed, e))
    }

    fn extents<const N: usize>(&mut self) -> Result<[usize; N]> {
        let mut dims = [0usize; N];
        for d in dims.iter_mut() {
            *d = self.next_value("extent")?;
        }
        log::trace!("reading container with extents {:?}", dims);
        Ok(dims)
    }

    fn elements<T>(&mut self, dims: &[usize]) -> Result<Vec<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        let count = dims
            .iter()
            .try_fold(1usize, |acc, &d| acc.checked_mul(d))
            .ok_or_else(|| anyhow!("Extents {:?} overflow the addressable size", dims))?;
        // the declared count is untrusted, so don't reserve all of it up front
        let mut data = Vec::with_capacity(count.min(1 << 16));
        for _ in 0..count {
            data.push(self.next_value("element")?);
        }
        Ok(data)
    }

    fn expect_end(&mut self) -> Result<()> {
        match next_token(self.reader).context("Failed to read trailing input")? {
            None => Ok(()),
            Some(extra) => Err(anyhow!(
                "Unexpected trailing token {:?} after token {}",
                extra,
                self.consumed
            )),
        }
    }
}

fn read_array1<T, R>(tokens: &mut Tokens<'_, R>) -> Result<Array1<T>>
where
    R: BufRead,
    T: FromStr,
    T::Err: Display,
{
    let [n] = tokens.extents::<1>()?;
    Ok(Array1::from_vec(tokens.elements(&[n])?))
}

fn read_grid<T, O, R>(tokens: &mut Tokens<'_, R>) -> Result<Grid<T, O>>
where
    R: BufRead,
    O: Origin,
    T: FromStr,
    T::Err: Display,
{
    let [m, n] = tokens.extents::<2>()?;
    let data = tokens.elements(&[m, n])?;
    Ok(Grid::from_shape_vec((m, n), data)?)
}

fn read_volume<T, O, R>(tokens: &mut Tokens<'_, R>) -> Result<Volume<T, O>>
where
    R: BufRead,
    O: Origin,
    T: FromStr,
    T::Err: Display,
{
    let [m, n, p] = tokens.extents::<3>()?;
    let data = tokens.elements(&[m, n, p])?;
    Ok(Volume::from_shape_vec((m, n, p), data)?)
}

// ---------------------------------------------------------------------------
// Display (write layout)

impl<T: Display> fmt::Display for Array1<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.len())?;
        for value in self.iter() {
            writeln!(f, "{}", value)?;
        }
        writeln!(f)
    }
}

impl<T: Display, O: Origin> fmt::Display for Grid<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.dim1(), self.dim2())?;
        for row in self.rows() {
            for value in row {
                write!(f, "{} ", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<T: Display, O: Origin> fmt::Display for Volume<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (m, n, p) = self.shape();
        writeln!(f, "{} {} {}", m, n, p)?;
        let data = self.as_slice();
        for i in 0..m {
            for j in 0..n {
                let start = (i * n + j) * p;
                for value in &data[start..start + p] {
                    write!(f, "{} ", value)?;
                }
                writeln!(f)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// TextFormat / FromStr

macro_rules! impl_text_format {
    ([$($gen:tt)*] $ty:ty, $read:ident) => {
        impl<$($gen)*> TextFormat for $ty
        where
            T: Display + FromStr,
            T::Err: Display,
        {
            fn write_text<W: Write>(&self, writer: &mut W) -> io::Result<()> {
                write!(writer, "{}", self)
            }

            fn read_text<R: BufRead>(reader: &mut R) -> Result<Self> {
                $read(&mut Tokens::new(reader))
            }
        }

        impl<$($gen)*> FromStr for $ty
        where
            T: FromStr,
            T::Err: Display,
        {
            type Err = anyhow::Error;

            fn from_str(s: &str) -> Result<Self> {
                let mut bytes = s.as_bytes();
                let mut tokens = Tokens::new(&mut bytes);
                let value = $read(&mut tokens)?;
                tokens.expect_end()?;
                Ok(value)
            }
        }
    };
}

impl_text_format!([T] Array1<T>, read_array1);
impl_text_format!([T, O: Origin] Grid<T, O>, read_grid);
impl_text_format!([T, O: Origin] Volume<T, O>, read_volume);
