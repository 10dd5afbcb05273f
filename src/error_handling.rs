use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CalcError {
    #[error("could not read input: {0}")]
    bad_input(String),

    #[error("unexpected end of input")]
    end_of_input,

    #[error("invalid character, '{0}', encountered")]
    invalid_character(char),

    #[error("'{0}' is not a valid number")]
    invalid_number(String),

    #[error("expected {0}")]
    expected(&'static str),

    #[error("expected number or '('")]
    expected_primary,

    #[error("undefined variable '{0}'")]
    undefined(String),

    #[error("'{0}' declared twice")]
    declared_twice(String),

    #[error("division by zero")]
    division_by_zero,

    // Only reachable if the grammar pushes back twice without reading.
    #[error("token buffer full")]
    buffer_full,
}

pub type Result<T> = std::result::Result<T, CalcError>;
