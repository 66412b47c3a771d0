//! Documentation store of stripped reference pages, keyed by file name.
//!
//! Pages come from the module's compressed help archive (`qt<module>.qch`,
//! an SQLite database of zlib-compressed HTML) or, failing that, from the
//! module's directory of `*.html` files. A missing or unreadable source
//! yields an empty store: nothing gets documented, nothing fails.

use crate::strip::strip_tags;
use flate2::read::ZlibDecoder;
use rusqlite::{Connection, OpenFlags};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

const PAGE_EXTENSION: &str = ".html";

const QCH_QUERY: &str = "SELECT Name, Data FROM FileNameTable \
     INNER JOIN FileDataTable ON FileNameTable.FileId = FileDataTable.Id \
     WHERE Name LIKE '%.html' ORDER BY Name";

/// Every archived page starts with the big-endian uncompressed length.
const BLOB_HEADER_LEN: usize = 4;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cannot read help archive: {0}")]
    Archive(#[from] rusqlite::Error),
    #[error("page {name} in help archive is truncated")]
    Truncated { name: String },
    #[error("cannot decompress page {name}: {source}")]
    Decompress { name: String, source: io::Error },
    #[error("cannot read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid page pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("cannot list pages: {0}")]
    Glob(#[from] glob::GlobError),
}

#[derive(Debug, Clone, Default)]
pub struct DocumentationStore {
    pages: HashMap<String, String>,
}

impl DocumentationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store over already stripped pages.
    pub fn from_pages(pages: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            pages: pages.into_iter().collect(),
        }
    }

    /// Store over raw HTML pages, stripping each.
    pub fn from_html(pages: impl IntoIterator<Item = (String, String)>) -> Self {
        Self::from_pages(pages.into_iter().map(|(name, html)| (name, strip_tags(&html))))
    }

    pub fn page(&self, key: &str) -> Option<&str> {
        self.pages.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Load the pages of `module` under `docs_path`, degrading to an empty
    /// store on any error.
    pub fn load(docs_path: &Path, module: &str) -> Self {
        match Self::try_load(docs_path, module) {
            Ok(store) => store,
            Err(e) => {
                warn!(error = %e, "documentation unavailable");
                Self::new()
            }
        }
    }

    /// Load the pages of `module`: the `.qch` archive first, the HTML
    /// directory if the archive is absent or empty.
    pub fn try_load(docs_path: &Path, module: &str) -> Result<Self, StoreError> {
        if !docs_path.is_dir() {
            debug!(path = %docs_path.display(), "documentation root not found");
            return Ok(Self::new());
        }
        let module = module.to_lowercase();

        let archive = docs_path.join(format!("qt{module}.qch"));
        if archive.is_file() {
            let store = Self::from_pages(read_archive(&archive)?);
            if !store.is_empty() {
                info!(pages = store.len(), source = %archive.display(), "loaded documentation");
                return Ok(store);
            }
        }

        let dir = docs_path.join(format!("qt{module}"));
        if dir.is_dir() {
            let store = Self::from_pages(read_html_dir(&dir)?);
            info!(pages = store.len(), source = %dir.display(), "loaded documentation");
            return Ok(store);
        }

        debug!(module = %module, "no documentation for module");
        Ok(Self::new())
    }
}

fn read_archive(path: &Path) -> Result<HashMap<String, String>, StoreError> {
    let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
    let mut stmt = conn.prepare(QCH_QUERY)?;
    let rows = stmt.query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, Vec<u8>>(1)?)))?;

    let mut pages = HashMap::new();
    for row in rows {
        let (name, blob) = row?;
        if !name.ends_with(PAGE_EXTENSION) {
            continue;
        }
        let html = inflate_page(&name, &blob)?;
        pages.insert(name, strip_tags(&html));
    }
    Ok(pages)
}

fn inflate_page(name: &str, blob: &[u8]) -> Result<String, StoreError> {
    let compressed = blob.get(BLOB_HEADER_LEN..).ok_or_else(|| StoreError::Truncated {
        name: name.to_string(),
    })?;
    let mut html = Vec::new();
    ZlibDecoder::new(compressed)
        .read_to_end(&mut html)
        .map_err(|source| StoreError::Decompress {
            name: name.to_string(),
            source,
        })?;
    Ok(String::from_utf8_lossy(&html).into_owned())
}

fn read_html_dir(dir: &Path) -> Result<HashMap<String, String>, StoreError> {
    let pattern = format!(
        "{}/*{PAGE_EXTENSION}",
        glob::Pattern::escape(&dir.to_string_lossy())
    );
    let mut pages = HashMap::new();
    for entry in glob::glob(&pattern)? {
        let path = entry?;
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().to_string()) else {
            continue;
        };
        let bytes = fs::read(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        let html = String::from_utf8_lossy(&bytes).replace('\r', "").replace('\\', r"\\");
        pages.insert(name, strip_tags(&html));
    }
    Ok(pages)
}
