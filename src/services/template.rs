use crate::domain::models::Person;

pub fn sample_people() -> Vec<Person> {
    vec![
        Person::new("Graham", "Chapman"),
        Person::new("John", "Cleese"),
        Person::new("Terry", "Gilliam"),
        Person::new("Eric", "Idle"),
        Person::new("Terry", "Jones"),
        Person::new("Michael", "Palin"),
    ]
}

/// Renders one row per person, the way a view loop yields each record to its body.
pub fn render_people<F>(people: &[Person], row: F) -> Vec<String>
where
    F: Fn(&Person) -> String,
{
    people.iter().map(row).collect()
}

pub fn full_name(p: &Person) -> String {
    format!("{} {}", p.first_name, p.last_name)
}
