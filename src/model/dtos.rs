/// One course entry in the enrollment picker: the label carries the
/// "(Ya inscrito)" suffix and `disabled` grays the option out when the
/// selected user already holds a link to it.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseChoice {
    pub curso_id: i64,
    pub label: String,
    pub disabled: bool,
}
