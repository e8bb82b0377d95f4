use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::app::AppError;
use crate::harvest::HouseholdInput;
use crate::i18n::{keys, Translator};
use crate::location::LocationQuery;
use crate::units::{convert_area, AreaUnit};

/// 표준 입력으로 가구 정보를 묻는다.
pub fn prompt_household(tr: &Translator, area_unit: AreaUnit) -> Result<HouseholdInput, AppError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    read_household(&mut input, &mut out, tr, area_unit)
}

/// 입력/출력 스트림을 받아 가구 정보를 읽는다. 빈 숫자 입력은 0으로 본다.
pub fn read_household<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    tr: &Translator,
    area_unit: AreaUnit,
) -> Result<HouseholdInput, AppError> {
    writeln!(out, "{}", tr.t(keys::FORM_TITLE))?;
    let name = read_line(input, out, tr.t(keys::PROMPT_NAME))?;
    let location_name = read_optional(input, out, tr.t(keys::PROMPT_LOCATION))?;
    let (latitude, longitude) = if location_name.is_none() {
        match read_optional_f64(input, out, tr, tr.t(keys::PROMPT_LATITUDE))? {
            Some(lat) => {
                let lon = read_f64(input, out, tr, tr.t(keys::PROMPT_LONGITUDE))?;
                (Some(lat), Some(lon))
            }
            None => (None, None),
        }
    } else {
        (None, None)
    };

    let household_size: u32 =
        read_optional_number(input, out, tr, tr.t(keys::PROMPT_HOUSEHOLD_SIZE))?.unwrap_or(0);
    let area_prompt = |key: &str| format!("{} [{}]: ", tr.t(key), area_unit.symbol());
    let roof_area = read_optional_f64(input, out, tr, &area_prompt(keys::PROMPT_ROOF_AREA))?
        .unwrap_or(0.0);
    let open_space = read_optional_f64(input, out, tr, &area_prompt(keys::PROMPT_OPEN_SPACE))?
        .unwrap_or(0.0);

    Ok(HouseholdInput {
        name,
        location: LocationQuery {
            name: location_name,
            latitude,
            longitude,
        },
        household_size,
        rooftop_area_m2: convert_area(roof_area, area_unit, AreaUnit::SquareMeter),
        open_space_area_m2: convert_area(open_space, area_unit, AreaUnit::SquareMeter),
        roof_type: read_optional(input, out, tr.t(keys::PROMPT_ROOF_TYPE))?,
        property_type: read_optional(input, out, tr.t(keys::PROMPT_PROPERTY_TYPE))?,
        existing_water_sources: read_optional(input, out, tr.t(keys::PROMPT_WATER_SOURCES))?,
        budget_preference: read_optional(input, out, tr.t(keys::PROMPT_BUDGET))?,
        intended_use: read_optional(input, out, tr.t(keys::PROMPT_INTENDED_USE))?,
    })
}

fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<String, AppError> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut buf = String::new();
    input.read_line(&mut buf)?;
    Ok(buf.trim().to_string())
}

fn read_optional<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>, AppError> {
    let s = read_line(input, out, prompt)?;
    Ok(if s.is_empty() { None } else { Some(s) })
}

fn read_f64<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    tr: &Translator,
    prompt: &str,
) -> Result<f64, AppError> {
    read_optional_f64(input, out, tr, prompt)?.ok_or_else(|| {
        io::Error::new(io::ErrorKind::UnexpectedEof, "a numeric value is required").into()
    })
}

/// 빈 입력은 None, 숫자가 아니면 다시 묻는다. 입력이 끝나면(EOF) None.
fn read_optional_f64<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    tr: &Translator,
    prompt: &str,
) -> Result<Option<f64>, AppError> {
    read_optional_number(input, out, tr, prompt)
}

/// `T`로 파싱되지 않는 입력(정수 자리의 소수, 음수 등)은 다시 묻는다.
fn read_optional_number<T: FromStr, R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    tr: &Translator,
    prompt: &str,
) -> Result<Option<T>, AppError> {
    loop {
        write!(out, "{prompt}")?;
        out.flush()?;
        let mut buf = String::new();
        if input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let s = buf.trim();
        if s.is_empty() {
            return Ok(None);
        }
        match s.parse::<T>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => writeln!(out, "{}", tr.t(keys::ERROR_INVALID_NUMBER))?,
        }
    }
}
