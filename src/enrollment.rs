//! Enrollment membership derived from the courses' embedded link
//! lists. A link's existence is the sole source of truth: no separate
//! enrollment entity is fetched anywhere.

use std::collections::HashSet;

use crate::model::structs::Course;

/// True iff the course with `curso_id` carries a link for
/// `usuario_id`. Linear search; lists are roster-scale.
///
/// This is the duplicate-enrollment guard. It is advisory only: the
/// backend is not re-consulted, so two clients enrolling concurrently
/// can still both succeed.
pub fn is_enrolled(courses: &[Course], usuario_id: i64, curso_id: i64) -> bool {
    courses
        .iter()
        .find(|c| c.id == Some(curso_id))
        .map(|c| c.curso_usuarios.iter().any(|cu| cu.usuario_id == usuario_id))
        .unwrap_or(false)
}

/// Ids of every course `usuario_id` is linked to; drives the graying
/// of already-enrolled choices in the picker.
pub fn enrolled_course_ids(courses: &[Course], usuario_id: i64) -> HashSet<i64> {
    courses
        .iter()
        .filter(|c| c.curso_usuarios.iter().any(|cu| cu.usuario_id == usuario_id))
        .filter_map(|c| c.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::structs::EnrollmentLink;

    fn curso(id: i64, usuarios: &[i64]) -> Course {
        Course {
            id: Some(id),
            nombre: format!("Curso {id}"),
            descripcion: "Descripción de prueba suficientemente larga".to_string(),
            creditos: 4,
            curso_usuarios: usuarios
                .iter()
                .enumerate()
                .map(|(i, &usuario_id)| EnrollmentLink {
                    id: Some(i as i64 + 1),
                    usuario_id,
                })
                .collect(),
        }
    }

    #[test]
    fn enrolled_when_link_matches() {
        let courses = vec![curso(1, &[10, 11]), curso(2, &[11])];
        assert!(is_enrolled(&courses, 10, 1));
        assert!(is_enrolled(&courses, 11, 2));
    }

    #[test]
    fn not_enrolled_when_no_link_for_user() {
        let courses = vec![curso(1, &[10])];
        assert!(!is_enrolled(&courses, 99, 1));
    }

    #[test]
    fn not_enrolled_when_course_missing() {
        let courses = vec![curso(1, &[10])];
        assert!(!is_enrolled(&courses, 10, 2));
    }

    #[test]
    fn not_enrolled_on_empty_list() {
        assert!(!is_enrolled(&[], 10, 1));
    }

    #[test]
    fn membership_checks_the_matching_course_only() {
        // User 10 is linked to course 1; a lookup against course 2
        // must not see course 1's links.
        let courses = vec![curso(1, &[10]), curso(2, &[])];
        assert!(!is_enrolled(&courses, 10, 2));
    }

    #[test]
    fn enrolled_course_ids_collects_every_link() {
        let courses = vec![curso(1, &[10]), curso(2, &[10, 11]), curso(3, &[11])];
        let ids = enrolled_course_ids(&courses, 10);
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&1) && ids.contains(&2));
    }

    #[test]
    fn enrolled_course_ids_empty_for_unknown_user() {
        let courses = vec![curso(1, &[10])];
        assert!(enrolled_course_ids(&courses, 99).is_empty());
    }
}
