//! Entity shapes handled by the generic stores.
//!
//! A [`Record`] knows how to build itself from its draft and how to merge a
//! partial patch. Backends that cannot express the merge in their query
//! language (the memory store) call these directly.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use schoolhouse_models::{
    Classroom, NewClassroom, NewSchool, NewStudent, School, Student, UpdateClassroomDto,
    UpdateSchoolDto, UpdateStudentDto,
};

pub trait Record: Clone + Send + Sync + 'static {
    /// Create input. Carries every required field except id and timestamps.
    type Draft: Send + 'static;
    /// Partial update. `None` fields are left untouched.
    type Patch: Send + 'static;

    /// Human-readable entity name used in log and error messages.
    const NAME: &'static str;

    fn id(&self) -> Uuid;
    fn created_at(&self) -> DateTime<Utc>;
    fn from_draft(id: Uuid, draft: Self::Draft, now: DateTime<Utc>) -> Self;
    fn apply(&mut self, patch: Self::Patch, now: DateTime<Utc>);
}

impl Record for School {
    type Draft = NewSchool;
    type Patch = UpdateSchoolDto;

    const NAME: &'static str = "School";

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(id: Uuid, draft: NewSchool, now: DateTime<Utc>) -> Self {
        School {
            id,
            name: draft.name,
            address: draft.address,
            superadmin_id: draft.superadmin_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: UpdateSchoolDto, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        self.updated_at = now;
    }
}

impl Record for Classroom {
    type Draft = NewClassroom;
    type Patch = UpdateClassroomDto;

    const NAME: &'static str = "Classroom";

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(id: Uuid, draft: NewClassroom, now: DateTime<Utc>) -> Self {
        Classroom {
            id,
            name: draft.name,
            capacity: draft.capacity,
            school_id: draft.school_id,
            school_admin_id: draft.school_admin_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: UpdateClassroomDto, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(capacity) = patch.capacity {
            self.capacity = capacity;
        }
        if let Some(school_id) = patch.school_id {
            self.school_id = school_id;
        }
        self.updated_at = now;
    }
}

impl Record for Student {
    type Draft = NewStudent;
    type Patch = UpdateStudentDto;

    const NAME: &'static str = "Student";

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_draft(id: Uuid, draft: NewStudent, now: DateTime<Utc>) -> Self {
        Student {
            id,
            name: draft.name,
            age: draft.age,
            school_id: draft.school_id,
            classroom_id: draft.classroom_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply(&mut self, patch: UpdateStudentDto, now: DateTime<Utc>) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(school_id) = patch.school_id {
            self.school_id = Some(school_id);
        }
        if let Some(classroom_id) = patch.classroom_id {
            self.classroom_id = classroom_id;
        }
        self.updated_at = now;
    }
}
