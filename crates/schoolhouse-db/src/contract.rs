//! Behaviour every store backend must share. Each backend's test module
//! runs these against its own implementation.

use uuid::Uuid;

use schoolhouse_auth::Role;
use schoolhouse_core::ErrorKind;
use schoolhouse_models::{
    Classroom, NewClassroom, NewSchool, NewStudent, NewUser, School, Student, UpdateClassroomDto,
    UpdateSchoolDto, UpdateStudentDto,
};

use crate::store::{RecordStore, UserStore};

pub fn new_school(name: &str) -> NewSchool {
    NewSchool {
        name: name.to_string(),
        address: "123 Street".to_string(),
        superadmin_id: Uuid::new_v4(),
    }
}

pub fn new_user(email: &str, role: Role) -> NewUser {
    NewUser {
        name: "Admin".to_string(),
        email: email.to_string(),
        password_hash: "hash".to_string(),
        role,
    }
}

pub async fn create_then_get(store: &dyn RecordStore<School>) {
    let school = store.create(new_school("Test School")).await.unwrap();

    let found = store.get_by_id(school.id).await.unwrap().unwrap();
    assert_eq!(found, school);
    assert_eq!(found.created_at, found.updated_at);
}

pub async fn get_all_is_oldest_first(store: &dyn RecordStore<School>) {
    let first = store.create(new_school("First")).await.unwrap();
    let second = store.create(new_school("Second")).await.unwrap();
    let third = store.create(new_school("Third")).await.unwrap();

    let all = store.get_all().await.unwrap();
    assert_eq!(all.len(), 3);
    assert!(
        all.windows(2)
            .all(|w| (w[0].created_at, w[0].id) <= (w[1].created_at, w[1].id))
    );
    for school in [&first, &second, &third] {
        assert!(all.iter().any(|s| s.id == school.id));
    }
}

pub async fn school_update_merges(store: &dyn RecordStore<School>) {
    let school = store.create(new_school("Test School")).await.unwrap();

    let updated = store
        .update_by_id(
            school.id,
            UpdateSchoolDto {
                name: Some("Renamed".to_string()),
                address: None,
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.address, school.address);
    assert_eq!(updated.superadmin_id, school.superadmin_id);
    assert_eq!(updated.created_at, school.created_at);
    assert!(updated.updated_at >= school.updated_at);
}

pub async fn classroom_update_merges(store: &dyn RecordStore<Classroom>) {
    let school_id = Uuid::new_v4();
    let classroom = store
        .create(NewClassroom {
            name: "Math Class".to_string(),
            capacity: 30,
            school_id,
            school_admin_id: Uuid::new_v4(),
        })
        .await
        .unwrap();

    let updated = store
        .update_by_id(
            classroom.id,
            UpdateClassroomDto {
                name: Some("Science Class".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Science Class");
    assert_eq!(updated.capacity, 30);
    assert_eq!(updated.school_id, school_id);

    let moved_to = Uuid::new_v4();
    let updated = store
        .update_by_id(
            classroom.id,
            UpdateClassroomDto {
                school_id: Some(moved_to),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Science Class");
    assert_eq!(updated.school_id, moved_to);
}

pub async fn student_update_merges(store: &dyn RecordStore<Student>) {
    let classroom_id = Uuid::new_v4();
    let student = store
        .create(NewStudent {
            name: "John Doe".to_string(),
            age: 15,
            school_id: None,
            classroom_id,
        })
        .await
        .unwrap();
    assert!(student.school_id.is_none());

    let updated = store
        .update_by_id(
            student.id,
            UpdateStudentDto {
                age: Some(16),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "John Doe");
    assert_eq!(updated.age, 16);
    assert_eq!(updated.classroom_id, classroom_id);
    assert!(updated.school_id.is_none());
}

pub async fn absent_id_is_stable(store: &dyn RecordStore<School>) {
    let id = Uuid::new_v4();

    for _ in 0..2 {
        assert!(store.get_by_id(id).await.unwrap().is_none());
        assert!(
            store
                .update_by_id(id, UpdateSchoolDto::default())
                .await
                .unwrap()
                .is_none()
        );
        assert!(!store.delete_by_id(id).await.unwrap());
    }
}

pub async fn delete_twice(store: &dyn RecordStore<School>) {
    let school = store.create(new_school("Test School")).await.unwrap();

    assert!(store.delete_by_id(school.id).await.unwrap());
    assert!(!store.delete_by_id(school.id).await.unwrap());
    assert!(store.get_by_id(school.id).await.unwrap().is_none());
}

pub async fn duplicate_email_is_rejected(store: &dyn UserStore) {
    store
        .create(new_user("admin@example.com", Role::SchoolAdmin))
        .await
        .unwrap();

    let err = store
        .create(new_user("ADMIN@example.com", Role::SuperAdmin))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::BadRequest);
    assert_eq!(err.to_string(), "Email already registered");
}

pub async fn find_by_email_ignores_case(store: &dyn UserStore) {
    let created = store
        .create(new_user("Root@Example.com", Role::SuperAdmin))
        .await
        .unwrap();

    let found = store.find_by_email("root@example.COM").await.unwrap().unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.email, "Root@Example.com");
    assert_eq!(found.role, Role::SuperAdmin);
    assert_eq!(found.password_hash, "hash");

    assert!(store.find_by_email("other@example.com").await.unwrap().is_none());
}
