use std::io::Write;
use std::path::PathBuf;

use phonelookup_lib::{Error, PhoneDirectory, Result};
use tempfile::NamedTempFile;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/phone_numbers.csv")
}

#[test]
fn load_fixture_and_query_segment() -> Result<()> {
    let directory = PhoneDirectory::load(fixture_path())?;

    assert_eq!(directory.len(), 5, "fixture should have 5 segments");
    assert_eq!(directory.source(), Some(fixture_path().as_path()));

    let info = directory.get("1891234").expect("segment exists");
    assert_eq!(info.province, "Sichuan");
    assert_eq!(info.city, "Chengdu");
    assert_eq!(info.service_provider, "China Telecom");
    assert_eq!(info.area_code, "028");

    Ok(())
}

#[test]
fn load_missing_file_fails_startup() {
    let result = PhoneDirectory::load("/nonexistent/dir/phone_numbers.csv");
    match result {
        Err(Error::DataFileNotFound { path }) => {
            assert!(path.ends_with("phone_numbers.csv"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn load_file_with_mixed_rows() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(
        file,
        "prefix,segment,province,city,serviceProvider,areaCode,postalCode,areaNumber"
    )?;
    writeln!(file, "138,1381234,Beijing,Beijing,China Mobile,010,100000,110000")?;
    writeln!(file, "broken,row")?;
    writeln!(file)?;
    writeln!(file, "138,1381234,Tianjin,Tianjin,China Mobile,022,300000,120000")?;
    writeln!(file, "139,1391234,Guangdong,Guangzhou,China Mobile,020,510000,440100")?;
    file.flush()?;

    let directory = PhoneDirectory::load(file.path())?;

    // Short row skipped, blank line ignored, duplicate overwritten.
    assert_eq!(directory.len(), 2);
    let info = directory.get("1381234").expect("segment exists");
    assert_eq!(info.province, "Tianjin");

    Ok(())
}
