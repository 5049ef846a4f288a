//! Turns a line of user input into a [`ClinicCommand`].

pub mod tokenizer;

use chrono::NaiveDate;
use clinic_core::commands::{
    AddCommand, BookApptCommand, ClearCommand, DeleteApptCommand, DeleteCommand, EditCommand,
    EditPatientDescriptor, FilterCommand, FindCommand, ListCommand, ViewCommand,
};
use clinic_core::constants::DATE_FORMAT;
use clinic_core::{
    Allergy, AllergyList, AppointmentDateFilter, Appt, Birthdate, ClinicCommand, ClinicError,
    HealthService, Name, Nric, Patient, Phone, Sex,
};

use tokenizer::{
    tokenize, ArgumentMultimap, Prefix, PREFIX_ALLERGY, PREFIX_BIRTHDATE, PREFIX_DATE_TIME,
    PREFIX_END_DATE, PREFIX_HEALTH_SERVICE, PREFIX_NAME, PREFIX_NRIC, PREFIX_PHONE, PREFIX_SEX,
    PREFIX_START_DATE,
};

pub const HELP_WORD: &str = "help";
pub const EXIT_WORD: &str = "exit";

pub const MESSAGE_HELP_USAGE: &str = "help: Shows the available commands.\n\
    Parameters: [COMMAND]\n\
    Example: help bookappt";

pub const MESSAGE_INVALID_DATE: &str = "Dates should be in the format YYYY-MM-DD";

/// Why a line of input could not be turned into a command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid command format!\n{0}")]
    InvalidFormat(&'static str),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Multiple values specified for the following single-valued field(s): {}", .0.join(" "))]
    DuplicatePrefixes(Vec<&'static str>),

    #[error(transparent)]
    InvalidValue(#[from] ClinicError),
}

pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// A parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(ClinicCommand),
    /// Show usage, optionally for a single command word.
    Help(Option<String>),
    Exit,
}

/// Parses one line of user input.
pub fn parse_input(line: &str) -> ParseResult<Input> {
    let line = line.trim();
    let (word, args) = match line.split_once(char::is_whitespace) {
        Some((word, args)) => (word, args),
        None => (line, ""),
    };

    let command = match word {
        HELP_WORD => {
            let topic = args.trim();
            return Ok(Input::Help((!topic.is_empty()).then(|| topic.to_string())));
        }
        EXIT_WORD => return Ok(Input::Exit),
        "" => return Err(ParseError::InvalidFormat(MESSAGE_HELP_USAGE)),
        AddCommand::COMMAND_WORD => ClinicCommand::Add(parse_add(args)?),
        DeleteCommand::COMMAND_WORD => {
            let nric = parse_nric_only(args, DeleteCommand::MESSAGE_USAGE)?;
            ClinicCommand::Delete(DeleteCommand::new(nric))
        }
        EditCommand::COMMAND_WORD => ClinicCommand::Edit(parse_edit(args)?),
        BookApptCommand::COMMAND_WORD => {
            let (nric, appt) = parse_appt_args(args, BookApptCommand::MESSAGE_USAGE)?;
            ClinicCommand::BookAppt(BookApptCommand::new(nric, appt))
        }
        DeleteApptCommand::COMMAND_WORD => {
            let (nric, appt) = parse_appt_args(args, DeleteApptCommand::MESSAGE_USAGE)?;
            ClinicCommand::DeleteAppt(DeleteApptCommand::new(nric, appt))
        }
        FilterCommand::COMMAND_WORD => ClinicCommand::Filter(parse_filter(args)?),
        FindCommand::COMMAND_WORD => ClinicCommand::Find(parse_find(args)?),
        ListCommand::COMMAND_WORD | ListCommand::COMMAND_ALIAS => ClinicCommand::List(ListCommand),
        ViewCommand::COMMAND_WORD => {
            let nric = parse_nric_only(args, ViewCommand::MESSAGE_USAGE)?;
            ClinicCommand::View(ViewCommand::new(nric))
        }
        ClearCommand::COMMAND_WORD => ClinicCommand::Clear(ClearCommand),
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };

    Ok(Input::Command(command))
}

/// Usage text for `word`, or for every command when `word` is `None`.
pub fn usage(word: Option<&str>) -> ParseResult<String> {
    const ALL: [&str; 11] = [
        AddCommand::MESSAGE_USAGE,
        DeleteCommand::MESSAGE_USAGE,
        EditCommand::MESSAGE_USAGE,
        BookApptCommand::MESSAGE_USAGE,
        DeleteApptCommand::MESSAGE_USAGE,
        FilterCommand::MESSAGE_USAGE,
        FindCommand::MESSAGE_USAGE,
        ListCommand::MESSAGE_USAGE,
        ViewCommand::MESSAGE_USAGE,
        ClearCommand::MESSAGE_USAGE,
        MESSAGE_HELP_USAGE,
    ];

    let Some(word) = word else {
        return Ok(ALL.join("\n\n"));
    };
    let text = match word {
        AddCommand::COMMAND_WORD => AddCommand::MESSAGE_USAGE,
        DeleteCommand::COMMAND_WORD => DeleteCommand::MESSAGE_USAGE,
        EditCommand::COMMAND_WORD => EditCommand::MESSAGE_USAGE,
        BookApptCommand::COMMAND_WORD => BookApptCommand::MESSAGE_USAGE,
        DeleteApptCommand::COMMAND_WORD => DeleteApptCommand::MESSAGE_USAGE,
        FilterCommand::COMMAND_WORD => FilterCommand::MESSAGE_USAGE,
        FindCommand::COMMAND_WORD => FindCommand::MESSAGE_USAGE,
        ListCommand::COMMAND_WORD | ListCommand::COMMAND_ALIAS => ListCommand::MESSAGE_USAGE,
        ViewCommand::COMMAND_WORD => ViewCommand::MESSAGE_USAGE,
        ClearCommand::COMMAND_WORD => ClearCommand::MESSAGE_USAGE,
        HELP_WORD => MESSAGE_HELP_USAGE,
        other => return Err(ParseError::UnknownCommand(other.to_string())),
    };
    Ok(text.to_string())
}

/// Patient fields that take exactly one value.
const PATIENT_FIELDS: [Prefix; 5] = [
    PREFIX_NAME,
    PREFIX_NRIC,
    PREFIX_SEX,
    PREFIX_BIRTHDATE,
    PREFIX_PHONE,
];

const PATIENT_PREFIXES: [Prefix; 6] = [
    PREFIX_NAME,
    PREFIX_NRIC,
    PREFIX_SEX,
    PREFIX_BIRTHDATE,
    PREFIX_PHONE,
    PREFIX_ALLERGY,
];

fn ensure_no_duplicates(map: &ArgumentMultimap, single_valued: &[Prefix]) -> ParseResult<()> {
    let repeated = map.repeated(single_valued);
    if repeated.is_empty() {
        Ok(())
    } else {
        Err(ParseError::DuplicatePrefixes(
            repeated.into_iter().map(Prefix::as_str).collect(),
        ))
    }
}

fn required<'a>(
    map: &'a ArgumentMultimap,
    prefix: Prefix,
    usage: &'static str,
) -> ParseResult<&'a str> {
    map.value(prefix).ok_or(ParseError::InvalidFormat(usage))
}

fn parse_preamble_nric(map: &ArgumentMultimap, usage: &'static str) -> ParseResult<Nric> {
    if map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat(usage));
    }
    Ok(Nric::parse(map.preamble())?)
}

fn parse_allergies(values: &[String]) -> ParseResult<AllergyList> {
    values
        .iter()
        .filter(|v| !v.is_empty())
        .map(|v| Allergy::parse(v).map_err(ParseError::from))
        .collect()
}

fn parse_date(input: &str) -> ParseResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| ClinicError::InvalidInput(MESSAGE_INVALID_DATE.to_string()).into())
}

fn parse_add(args: &str) -> ParseResult<AddCommand> {
    let usage = AddCommand::MESSAGE_USAGE;

    let map = tokenize(args, &PATIENT_PREFIXES);
    if !map.preamble().is_empty() || !PATIENT_FIELDS.iter().all(|p| map.is_present(*p)) {
        return Err(ParseError::InvalidFormat(usage));
    }
    ensure_no_duplicates(&map, &PATIENT_FIELDS)?;

    let patient = Patient::new(
        Nric::parse(required(&map, PREFIX_NRIC, usage)?)?,
        Name::parse(required(&map, PREFIX_NAME, usage)?)?,
        Sex::parse(required(&map, PREFIX_SEX, usage)?)?,
        Birthdate::parse(required(&map, PREFIX_BIRTHDATE, usage)?)?,
        Phone::parse(required(&map, PREFIX_PHONE, usage)?)?,
    )
    .with_allergies(parse_allergies(map.all_values(PREFIX_ALLERGY))?);

    Ok(AddCommand::new(patient))
}

fn parse_edit(args: &str) -> ParseResult<EditCommand> {
    let map = tokenize(args, &PATIENT_PREFIXES);
    let nric = parse_preamble_nric(&map, EditCommand::MESSAGE_USAGE)?;
    ensure_no_duplicates(&map, &PATIENT_FIELDS)?;

    // A lone empty `al/` clears the allergy list.
    let allergies = if map.is_present(PREFIX_ALLERGY) {
        Some(parse_allergies(map.all_values(PREFIX_ALLERGY))?)
    } else {
        None
    };

    let descriptor = EditPatientDescriptor {
        name: map.value(PREFIX_NAME).map(Name::parse).transpose()?,
        nric: map.value(PREFIX_NRIC).map(Nric::parse).transpose()?,
        sex: map.value(PREFIX_SEX).map(Sex::parse).transpose()?,
        birthdate: map.value(PREFIX_BIRTHDATE).map(Birthdate::parse).transpose()?,
        phone: map.value(PREFIX_PHONE).map(Phone::parse).transpose()?,
        allergies,
    };

    Ok(EditCommand::new(nric, descriptor))
}

fn parse_appt_args(args: &str, usage: &'static str) -> ParseResult<(Nric, Appt)> {
    const SINGLE: [Prefix; 2] = [PREFIX_DATE_TIME, PREFIX_HEALTH_SERVICE];

    let map = tokenize(args, &SINGLE);
    let nric = parse_preamble_nric(&map, usage)?;
    ensure_no_duplicates(&map, &SINGLE)?;

    let date_time = Appt::parse_date_time(required(&map, PREFIX_DATE_TIME, usage)?)?;
    let service = HealthService::parse(required(&map, PREFIX_HEALTH_SERVICE, usage)?)?;

    Ok((nric, Appt::new(date_time, service)))
}

fn parse_filter(args: &str) -> ParseResult<FilterCommand> {
    const SINGLE: [Prefix; 2] = [PREFIX_START_DATE, PREFIX_END_DATE];
    let usage = FilterCommand::MESSAGE_USAGE;

    let map = tokenize(args, &[PREFIX_START_DATE, PREFIX_END_DATE, PREFIX_HEALTH_SERVICE]);
    if !map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat(usage));
    }
    ensure_no_duplicates(&map, &SINGLE)?;

    let start = parse_date(required(&map, PREFIX_START_DATE, usage)?)?;
    let end = parse_date(required(&map, PREFIX_END_DATE, usage)?)?;
    let services = map
        .all_values(PREFIX_HEALTH_SERVICE)
        .iter()
        .map(HealthService::parse)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FilterCommand::new(AppointmentDateFilter::new(start, end, services)?))
}

fn parse_find(args: &str) -> ParseResult<FindCommand> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::InvalidFormat(FindCommand::MESSAGE_USAGE));
    }
    Ok(FindCommand::new(keywords))
}

fn parse_nric_only(args: &str, usage: &'static str) -> ParseResult<Nric> {
    let args = args.trim();
    if args.is_empty() || args.contains(char::is_whitespace) {
        return Err(ParseError::InvalidFormat(usage));
    }
    Ok(Nric::parse(args)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn command(line: &str) -> ClinicCommand {
        match parse_input(line).expect("line should parse") {
            Input::Command(command) => command,
            other => panic!("expected a command, got {other:?}"),
        }
    }

    fn nric(text: &str) -> Nric {
        Nric::parse(text).expect("valid nric")
    }

    #[test]
    fn parses_add_with_allergies() {
        let parsed = command(
            "add n/Alice Pauline i/s1234567a s/F d/1990-01-15 p/91234567 al/peanuts al/penicillin",
        );
        let ClinicCommand::Add(add) = parsed else {
            panic!("expected add, got {parsed:?}");
        };

        let expected = Patient::new(
            nric("S1234567A"),
            Name::parse("Alice Pauline").unwrap(),
            Sex::Female,
            Birthdate::parse("1990-01-15").unwrap(),
            Phone::parse("91234567").unwrap(),
        )
        .with_allergies(
            ["peanuts", "penicillin"]
                .into_iter()
                .map(|a| Allergy::parse(a).unwrap())
                .collect(),
        );
        assert_eq!(add, AddCommand::new(expected));
    }

    #[test]
    fn add_missing_field_is_invalid_format() {
        let err = parse_input("add n/Alice i/S1234567A s/F d/1990-01-15")
            .expect_err("phone is required");
        assert_eq!(err, ParseError::InvalidFormat(AddCommand::MESSAGE_USAGE));
    }

    #[test]
    fn add_with_repeated_single_prefix_is_rejected() {
        let err = parse_input("add n/Alice n/Bob i/S1234567A s/F d/1990-01-15 p/91234567")
            .expect_err("name given twice");
        assert_eq!(err, ParseError::DuplicatePrefixes(vec!["n/"]));
    }

    #[test]
    fn add_with_invalid_phone_reports_constraint() {
        let err = parse_input("add n/Alice i/S1234567A s/F d/1990-01-15 p/123")
            .expect_err("phone too short");
        assert!(matches!(err, ParseError::InvalidValue(ClinicError::InvalidInput(_))));
    }

    #[test]
    fn parses_bookappt() {
        let parsed = command("bookappt S1234567A dt/2024-09-01 10:00 h/blood test");
        let date_time = NaiveDate::from_ymd_opt(2024, 9, 1)
            .and_then(|d| d.and_hms_opt(10, 0, 0))
            .unwrap();
        assert_eq!(
            parsed,
            ClinicCommand::BookAppt(BookApptCommand::new(
                nric("S1234567A"),
                Appt::new(date_time, HealthService::BloodTest),
            ))
        );
    }

    #[test]
    fn bookappt_without_nric_is_invalid_format() {
        let err = parse_input("bookappt dt/2024-09-01 10:00 h/CONSULT").expect_err("no nric");
        assert_eq!(err, ParseError::InvalidFormat(BookApptCommand::MESSAGE_USAGE));
    }

    #[test]
    fn edit_with_empty_allergy_clears_list() {
        let parsed = command("edit S1234567A al/");
        let expected = EditPatientDescriptor {
            allergies: Some(AllergyList::new()),
            ..EditPatientDescriptor::default()
        };
        assert_eq!(
            parsed,
            ClinicCommand::Edit(EditCommand::new(nric("S1234567A"), expected))
        );
    }

    #[test]
    fn edit_without_fields_still_parses() {
        // The command itself reports that nothing was edited.
        let parsed = command("edit S1234567A");
        assert_eq!(
            parsed,
            ClinicCommand::Edit(EditCommand::new(
                nric("S1234567A"),
                EditPatientDescriptor::default()
            ))
        );
    }

    #[test]
    fn parses_filter_with_services() {
        let parsed = command("filter sd/2024-08-30 ed/2024-11-30 h/vaccination h/consult");
        let start = NaiveDate::from_ymd_opt(2024, 8, 30).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 11, 30).unwrap();
        let filter = AppointmentDateFilter::new(
            start,
            end,
            [HealthService::Vaccination, HealthService::Consult],
        )
        .unwrap();
        assert_eq!(parsed, ClinicCommand::Filter(FilterCommand::new(filter)));
    }

    #[test]
    fn filter_with_reversed_range_is_rejected() {
        let err = parse_input("filter sd/2024-12-01 ed/2024-11-30").expect_err("end before start");
        assert!(matches!(err, ParseError::InvalidValue(ClinicError::InvalidInput(_))));
    }

    #[test]
    fn filter_with_bad_date_is_rejected() {
        let err = parse_input("filter sd/30-08-2024 ed/2024-11-30").expect_err("bad date");
        assert_eq!(
            err,
            ParseError::InvalidValue(ClinicError::InvalidInput(MESSAGE_INVALID_DATE.to_string()))
        );
    }

    #[test]
    fn parses_simple_commands() {
        assert_eq!(command("list"), ClinicCommand::List(ListCommand));
        assert_eq!(command("home"), ClinicCommand::List(ListCommand));
        assert_eq!(command("clear"), ClinicCommand::Clear(ClearCommand));
        assert_eq!(
            command("  view   S1234567A "),
            ClinicCommand::View(ViewCommand::new(nric("S1234567A")))
        );
        assert_eq!(
            command("find alice  bernice"),
            ClinicCommand::Find(FindCommand::new(vec!["alice".into(), "bernice".into()]))
        );
    }

    #[test]
    fn delete_with_extra_words_is_invalid_format() {
        let err = parse_input("delete S1234567A T7654321B").expect_err("two nrics");
        assert_eq!(err, ParseError::InvalidFormat(DeleteCommand::MESSAGE_USAGE));
    }

    #[test]
    fn help_and_exit() {
        assert_eq!(parse_input("help").unwrap(), Input::Help(None));
        assert_eq!(
            parse_input("help filter").unwrap(),
            Input::Help(Some("filter".to_string()))
        );
        assert_eq!(parse_input("exit").unwrap(), Input::Exit);
    }

    #[test]
    fn unknown_command_is_reported() {
        let err = parse_input("frobnicate now").expect_err("unknown word");
        assert_eq!(err, ParseError::UnknownCommand("frobnicate".to_string()));
        assert!(usage(Some("frobnicate")).is_err());
        assert!(usage(None).unwrap().contains(FilterCommand::MESSAGE_USAGE));
    }
}
