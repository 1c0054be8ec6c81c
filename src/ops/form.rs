use crate::model::task::Icon;

/// Why a new task was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("o nome da tarefa não pode ficar vazio")]
    EmptyName,
    #[error("ícone inválido: use letras, números ou hífens")]
    EmptyIcon,
    #[error("pontos inválidos: \"{0}\" não é um número inteiro positivo")]
    InvalidPoints(String),
    #[error("a tarefa precisa valer pelo menos 1 ponto")]
    ZeroPoints,
}

/// A validated task, ready to be appended to the routine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub name: String,
    pub icon: Icon,
    pub points: u32,
}

impl NewTask {
    /// Validate already-typed parts (used for configured starting tasks)
    pub fn from_parts(name: &str, icon: &str, points: u32) -> Result<NewTask, FormError> {
        if points == 0 {
            return Err(FormError::ZeroPoints);
        }
        Ok(NewTask {
            name: validate_name(name)?,
            icon: parse_icon(icon)?,
            points,
        })
    }
}

/// Validate the three raw inputs of the add-task form
pub fn parse_new_task(name: &str, icon: &str, points: &str) -> Result<NewTask, FormError> {
    Ok(NewTask {
        name: validate_name(name)?,
        icon: parse_icon(icon)?,
        points: parse_points(points)?,
    })
}

pub fn validate_name(raw: &str) -> Result<String, FormError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(FormError::EmptyName);
    }
    Ok(name.to_string())
}

pub fn parse_icon(raw: &str) -> Result<Icon, FormError> {
    Icon::sanitize(raw).ok_or(FormError::EmptyIcon)
}

/// Parse a positive point value. Anything that is not a whole number in
/// `1..=u32::MAX` is rejected.
pub fn parse_points(raw: &str) -> Result<u32, FormError> {
    let trimmed = raw.trim();
    let points: u32 = trimmed
        .parse()
        .map_err(|_| FormError::InvalidPoints(trimmed.to_string()))?;
    if points == 0 {
        return Err(FormError::ZeroPoints);
    }
    Ok(points)
}
