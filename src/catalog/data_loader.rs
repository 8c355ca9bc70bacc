use csv::ReaderBuilder;
use serde_json::Value;
use std::path::{Path, PathBuf};

use super::{FoodCatalog, RawFoodRecord};
use crate::errors::RecommendError;

// Expected column headers
const NAME_COL: &str = "name";
const ENERGY_COL: &str = "Energy";
const PROTEIN_COL: &str = "Protein";
const FAT_COL: &str = "Fat";
const CARB_COL: &str = "Carbohydrate";
const FIBER_COL: &str = "Fiber";
const IMAGE_COL: &str = "image";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    /// A JSON array of food records.
    Json,
    /// A headed CSV file; only the `name` column is mandatory.
    Csv,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Result<Self, RecommendError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match extension.as_deref() {
            Some("json") => Ok(CatalogFormat::Json),
            Some("csv") => Ok(CatalogFormat::Csv),
            _ => Err(RecommendError::UnsupportedCatalogFormat(path.display().to_string())),
        }
    }
}

/// Parses catalog file contents already read into memory.
pub fn parse_catalog_str(contents: &str, format: CatalogFormat) -> Result<FoodCatalog, RecommendError> {
    let records = match format {
        CatalogFormat::Json => serde_json::from_str::<Vec<RawFoodRecord>>(contents)?,
        CatalogFormat::Csv => parse_csv_records(contents)?,
    };
    Ok(FoodCatalog::from_records(records))
}

/// Reads and parses a `.json` or `.csv` catalog file.
pub fn load_catalog_file(path: &Path) -> Result<FoodCatalog, RecommendError> {
    if !path.exists() {
        return Err(catalog_error(path, "file not found"));
    }
    let format = CatalogFormat::from_path(path)?;
    let contents = std::fs::read_to_string(path)?;
    let catalog = parse_catalog_str(&contents, format)?;

    if catalog.is_empty() {
        return Err(catalog_error(path, "no valid food records"));
    }
    Ok(catalog)
}

fn catalog_error(path: &Path, reason: &str) -> RecommendError {
    RecommendError::CatalogLoad {
        path: PathBuf::from(path),
        reason: reason.to_string(),
    }
}

fn parse_csv_records(contents: &str) -> Result<Vec<RawFoodRecord>, RecommendError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(contents.as_bytes());

    let headers = rdr.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h == name);

    let name_idx = column(NAME_COL).ok_or_else(|| RecommendError::MissingColumn(NAME_COL.to_string()))?;
    let energy_idx = column(ENERGY_COL);
    let protein_idx = column(PROTEIN_COL);
    let fat_idx = column(FAT_COL);
    let carb_idx = column(CARB_COL);
    let fiber_idx = column(FIBER_COL);
    let image_idx = column(IMAGE_COL);

    let mut records = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let cell = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i))
                .map(|s| Value::String(s.to_string()))
        };
        records.push(RawFoodRecord {
            name: cell(Some(name_idx)),
            energy: cell(energy_idx),
            protein: cell(protein_idx),
            fat: cell(fat_idx),
            carbohydrate: cell(carb_idx),
            fiber: cell(fiber_idx),
            image: cell(image_idx),
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        write!(file, "{}", contents).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_csv_catalog() {
        let file = write_temp(
            ".csv",
            "name,Energy,Protein,Fat,Carbohydrate,Fiber,image\n\
             Pho Ga,450,28,12,55,2.5,https://example.com/phoga.jpg\n\
             Banh Mi,text,22,26,48,,\n\
             ,100,1,1,1,1,\n\
             Pho Ga,1,1,1,1,1,\n",
        );
        let catalog = load_catalog_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);

        let pho = &catalog.items()[0];
        assert_eq!(pho.energy, 450.0);
        assert_eq!(pho.fiber, 2.5);
        assert_eq!(pho.image.as_deref(), Some("https://example.com/phoga.jpg"));

        let banh_mi = &catalog.items()[1];
        assert_eq!(banh_mi.energy, 0.0);
        assert_eq!(banh_mi.fiber, 0.0);
        assert_eq!(banh_mi.image, None);
    }

    #[test]
    fn test_csv_optional_columns() {
        let catalog = parse_catalog_str("name,Energy\nChe,350\n", CatalogFormat::Csv).unwrap();
        assert_eq!(catalog.items()[0].energy, 350.0);
        assert_eq!(catalog.items()[0].protein, 0.0);
    }

    #[test]
    fn test_csv_missing_name_column() {
        let result = parse_catalog_str("title,Energy\nChe,350\n", CatalogFormat::Csv);
        assert!(matches!(&result, Err(RecommendError::MissingColumn(col)) if col == "name"));
        assert_eq!(result.unwrap_err().to_string(), "Column 'name' not found");
    }

    #[test]
    fn test_load_json_catalog() {
        let file = write_temp(
            ".json",
            r#"[
                {"name": "Com Tam", "Energy": 680, "Protein": "32", "Fat": 28, "Carbohydrate": 72},
                {"name": "Goi Cuon", "Energy": null, "Protein": 12}
            ]"#,
        );
        let catalog = load_catalog_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[0].protein, 32.0);
        assert_eq!(catalog.items()[1].energy, 0.0);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let result = parse_catalog_str("{not json", CatalogFormat::Json);
        assert!(matches!(result, Err(RecommendError::Json(_))));
    }

    #[test]
    fn test_file_not_found() {
        let result = load_catalog_file(Path::new("this_catalog_does_not_exist.json"));
        assert!(result.unwrap_err().to_string().contains("file not found"));
    }

    #[test]
    fn test_unsupported_extension() {
        let file = write_temp(".txt", "Pho Ga");
        assert!(matches!(
            load_catalog_file(file.path()),
            Err(RecommendError::UnsupportedCatalogFormat(_))
        ));
    }

    #[test]
    fn test_empty_catalog_file_is_an_error() {
        let file = write_temp(".json", "[]");
        let err = load_catalog_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("no valid food records"));
    }
}
