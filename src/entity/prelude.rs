//! Re-exports with unambiguous names.

pub use super::academic_years::{
    ActiveModel as AcademicYearActiveModel, Entity as AcademicYears, Model as AcademicYearModel,
};
pub use super::attendance::{
    ActiveModel as AttendanceActiveModel, Entity as Attendance, Model as AttendanceModel,
};
pub use super::ekstrakurikuler_activities::{
    ActiveModel as ActivityActiveModel, Entity as EkstrakurikulerActivities,
    Model as ActivityModel,
};
pub use super::ekstrakurikuler_members::{
    ActiveModel as ActivityMemberActiveModel, Entity as EkstrakurikulerMembers,
    Model as ActivityMemberModel,
};
pub use super::intrakurikuler_assignments::{
    ActiveModel as AssignmentActiveModel, Entity as IntrakurikulerAssignments,
    Model as AssignmentModel,
};
pub use super::intrakurikuler_subjects::{
    ActiveModel as SubjectActiveModel, Entity as IntrakurikulerSubjects, Model as SubjectModel,
};
pub use super::leave_requests::{
    ActiveModel as LeaveRequestActiveModel, Entity as LeaveRequests, Model as LeaveRequestModel,
};
pub use super::rombel_memberships::{
    ActiveModel as MembershipActiveModel, Entity as RombelMemberships, Model as MembershipModel,
};
pub use super::rombels::{ActiveModel as RombelActiveModel, Entity as Rombels, Model as RombelModel};
pub use super::sessions::{
    ActiveModel as SessionActiveModel, Entity as Sessions, Model as SessionModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
