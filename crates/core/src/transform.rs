//! Turns aligned source triples into destination records.

use serde_json::Value;

use crate::error::{CoreError, RecordOrigin};
use crate::normalize::Aligned;
use crate::records::{Course, Instructor, Item, NamedSource, Reserve};
use crate::types::new_record_id;

/// Destination records produced from one aligned input set.
///
/// All three vectors have the same length and index `i` of each was built
/// from the same source triple.
#[derive(Debug, Clone, Default)]
pub struct Transformed {
    pub courses: Vec<Course>,
    pub instructors: Vec<Instructor>,
    pub reserves: Vec<Reserve>,
}

impl Transformed {
    pub fn len(&self) -> usize {
        self.reserves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reserves.is_empty()
    }
}

pub fn course_record(source: &NamedSource) -> Course {
    Course {
        id: new_record_id(),
        name: source.name.clone(),
    }
}

pub fn instructor_record(source: &NamedSource) -> Instructor {
    Instructor {
        id: new_record_id(),
        name: source.name.clone(),
    }
}

/// Build a reserve from an item and the course and instructor built for the
/// same position.
pub fn reserve_record(item: &Item, instructor: &Instructor, course: &Course) -> Reserve {
    Reserve {
        id: new_record_id(),
        title: item.title.clone(),
        location: item.location.clone(),
        barcode: item.barcode.clone(),
        instructor_id: instructor.id,
        instructor: instructor.name.clone(),
        course_id: course.id,
        course: course.name.clone(),
    }
}

/// Transform every aligned triple. The first record missing a copied field
/// aborts the whole transformation; field values themselves are not checked.
pub fn transform(aligned: &Aligned<Value, Value, Value>) -> Result<Transformed, CoreError> {
    let mut out = Transformed {
        courses: Vec::with_capacity(aligned.len()),
        instructors: Vec::with_capacity(aligned.len()),
        reserves: Vec::with_capacity(aligned.len()),
    };

    for (index, (course_json, instructor_json, item_json)) in aligned.triples().enumerate() {
        let course_src = NamedSource::from_json(course_json, RecordOrigin::Course, index)?;
        let instructor_src =
            NamedSource::from_json(instructor_json, RecordOrigin::Instructor, index)?;
        let item = Item::from_jsonb(item_json, index)?;

        let course = course_record(&course_src);
        let instructor = instructor_record(&instructor_src);
        let reserve = reserve_record(&item, &instructor, &course);

        out.courses.push(course);
        out.instructors.push(instructor);
        out.reserves.push(reserve);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;
    use crate::normalize::{align, skip_header};

    fn named(names: &[&str]) -> Vec<Value> {
        names.iter().map(|n| json!({ "name": n })).collect()
    }

    fn items(n: usize) -> Vec<Value> {
        (0..n)
            .map(|i| {
                json!({
                    "title": format!("Title {i}"),
                    "barcode": format!("BC{i:04}"),
                    "location": { "name": format!("Shelf {i}") },
                })
            })
            .collect()
    }

    #[test]
    fn header_skip_and_truncation_drive_output_length() {
        let courses = skip_header(named(&["HEADER", "Biology", "Chemistry"]));
        let instructors = skip_header(named(&["HEADER", "Ada", "Grace"]));
        let aligned = align(courses, instructors, items(5));

        let out = transform(&aligned).unwrap();
        assert_eq!(out.courses.len(), 2);
        assert_eq!(out.instructors.len(), 2);
        assert_eq!(out.reserves.len(), 2);

        assert_eq!(out.reserves[0].course_id, out.courses[0].id);
        assert_eq!(out.reserves[0].course, "Biology");
        assert_eq!(out.reserves[0].instructor_id, out.instructors[0].id);
        assert_eq!(out.reserves[0].instructor, "Ada");
    }

    #[test]
    fn shortest_input_wins() {
        let courses = named(&["a", "b", "c", "d", "e"]);
        let instructors = named(&["x", "y"]);
        let out = transform(&align(courses, instructors, items(10))).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out.courses.len(), out.instructors.len());
    }

    #[test]
    fn reserves_reference_records_at_same_position() {
        let out = transform(&align(
            named(&["c0", "c1", "c2", "c3"]),
            named(&["i0", "i1", "i2", "i3"]),
            items(4),
        ))
        .unwrap();

        for (i, reserve) in out.reserves.iter().enumerate() {
            assert_eq!(reserve.course_id, out.courses[i].id);
            assert_eq!(reserve.course, out.courses[i].name);
            assert_eq!(reserve.instructor_id, out.instructors[i].id);
            assert_eq!(reserve.instructor, out.instructors[i].name);
            assert_eq!(reserve.title, format!("Title {i}"));
            assert_eq!(reserve.barcode, format!("BC{i:04}"));
            assert_eq!(reserve.location, format!("Shelf {i}"));
        }
    }

    #[test]
    fn generated_ids_are_unique_per_type() {
        let names: Vec<String> = (0..50).map(|i| format!("n{i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let out = transform(&align(named(&refs), named(&refs), items(50))).unwrap();

        let course_ids: HashSet<_> = out.courses.iter().map(|c| c.id).collect();
        let instructor_ids: HashSet<_> = out.instructors.iter().map(|i| i.id).collect();
        let reserve_ids: HashSet<_> = out.reserves.iter().map(|r| r.id).collect();
        assert_eq!(course_ids.len(), 50);
        assert_eq!(instructor_ids.len(), 50);
        assert_eq!(reserve_ids.len(), 50);
    }

    #[test]
    fn missing_item_field_fails_whole_run() {
        let mut bad_items = items(3);
        bad_items[1] = json!({ "title": "No barcode", "location": { "name": "Annex" } });

        let err = transform(&align(named(&["a", "b", "c"]), named(&["x", "y", "z"]), bad_items))
            .unwrap_err();
        assert_matches!(
            err,
            CoreError::MissingField { origin: RecordOrigin::Item, index: 1, field: "barcode" }
        );
    }

    #[test]
    fn item_values_are_copied_verbatim() {
        let odd_items = vec![
            json!({ "title": "Dune", "barcode": null, "location": { "name": "Stacks" } }),
            json!({ "title": 1965, "barcode": 39031031697261u64, "location": { "name": ["A", 2] } }),
        ];

        let out = transform(&align(named(&["a", "b"]), named(&["x", "y"]), odd_items)).unwrap();
        assert_eq!(out.reserves[0].barcode, Value::Null);
        assert_eq!(out.reserves[0].title, "Dune");
        assert_eq!(out.reserves[1].title, json!(1965));
        assert_eq!(out.reserves[1].barcode, json!(39031031697261u64));
        assert_eq!(out.reserves[1].location, json!(["A", 2]));

        let doc = serde_json::to_value(&out.reserves[0]).unwrap();
        assert_eq!(doc["barcode"], Value::Null);
    }

    #[test]
    fn null_names_are_copied() {
        let out = transform(&align(
            vec![json!({ "name": null })],
            vec![json!({ "name": 42 })],
            items(1),
        ))
        .unwrap();
        assert_eq!(out.courses[0].name, Value::Null);
        assert_eq!(out.reserves[0].course, Value::Null);
        assert_eq!(out.reserves[0].instructor, json!(42));
    }

    #[test]
    fn missing_instructor_name_fails() {
        let instructors = vec![json!({ "name": "x" }), json!({ "email": "y@example.edu" })];
        let err = transform(&align(named(&["a", "b"]), instructors, items(2))).unwrap_err();
        assert_matches!(
            err,
            CoreError::MissingField { origin: RecordOrigin::Instructor, index: 1, field: "name" }
        );
    }

    #[test]
    fn empty_input_produces_nothing() {
        let out = transform(&align(Vec::new(), named(&["x"]), items(1))).unwrap();
        assert!(out.is_empty());
    }
}
