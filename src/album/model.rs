use std::collections::HashSet;

/// A single image in an album, as returned by the store client.
/// Images are identified by `url`; `id` is only a display handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumImage {
    pub id: String,
    pub url: String,
    pub alt: String,
}

impl AlbumImage {
    /// Synthetic copy used to pad an odd-length album so every sheet
    /// has two faces. Gets a derived id so keyed rendering stays stable.
    fn padding_duplicate(&self) -> AlbumImage {
        AlbumImage {
            id: format!("{}-duplicate", self.id),
            url: self.url.clone(),
            alt: format!("{} (duplicate)", self.alt),
        }
    }
}

/// Two facing pages of the open book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    pub left: Option<AlbumImage>,
    pub right: Option<AlbumImage>,
}

/// Ordered list of sheets built once per album load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetList {
    sheets: Vec<Sheet>,
}

impl SheetList {
    /// Normalize a raw image sequence into sheets: dedup by url keeping
    /// first-seen order, pad an odd tail by duplicating the last unique
    /// image, then slice into consecutive pairs.
    pub fn build(images: &[AlbumImage]) -> Self {
        let mut seen = HashSet::new();
        let mut unique: Vec<AlbumImage> = Vec::with_capacity(images.len());
        for image in images {
            if seen.insert(image.url.clone()) {
                unique.push(image.clone());
            }
        }

        if unique.is_empty() {
            return Self::default();
        }

        if unique.len() % 2 != 0 {
            if let Some(last) = unique.last() {
                let duplicate = last.padding_duplicate();
                unique.push(duplicate);
            }
        }

        let sheets = unique
            .chunks(2)
            .map(|pair| Sheet {
                left: Some(pair[0].clone()),
                right: pair.get(1).cloned(),
            })
            .collect();

        Self { sheets }
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Index of the last sheet, or 0 for an empty list.
    pub fn last_index(&self) -> usize {
        self.sheets.len().saturating_sub(1)
    }

    /// Out-of-range indices resolve to an empty sheet rather than
    /// panicking; the view renders placeholders for empty faces.
    pub fn sheet(&self, index: usize) -> Sheet {
        self.sheets.get(index).cloned().unwrap_or_default()
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }
}
