use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250825_000001_create_user_table::Users;

static FK_PILOT_PROFILE_USER_ID: &str = "fk_pilot_profile_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PilotProfiles::Table)
                    .if_not_exists()
                    .col(pk_auto(PilotProfiles::Id))
                    .col(integer_uniq(PilotProfiles::UserId))
                    .col(string_null(PilotProfiles::DateOfBirth))
                    .col(text_null(PilotProfiles::Address))
                    .col(text_null(PilotProfiles::City))
                    .col(text_null(PilotProfiles::State))
                    .col(text_null(PilotProfiles::ZipCode))
                    .col(text_null(PilotProfiles::HomePhone))
                    .col(text_null(PilotProfiles::WorkPhone))
                    .col(text_null(PilotProfiles::Employer))
                    .col(string_null(PilotProfiles::DateEmployed))
                    .col(text_null(PilotProfiles::Position))
                    .col(text_null(PilotProfiles::AirmenCertificateNo))
                    .col(boolean(PilotProfiles::CertificateStudent))
                    .col(boolean(PilotProfiles::CertificatePrivate))
                    .col(boolean(PilotProfiles::CertificateCommercial))
                    .col(boolean(PilotProfiles::CertificateAtp))
                    .col(boolean(PilotProfiles::CertificateInstructor))
                    .col(boolean(PilotProfiles::RatingSingleEngineLand))
                    .col(boolean(PilotProfiles::RatingMultiEngineLand))
                    .col(boolean(PilotProfiles::RatingSingleEngineSea))
                    .col(boolean(PilotProfiles::RatingMultiEngineSea))
                    .col(boolean(PilotProfiles::RatingInstrument))
                    .col(boolean(PilotProfiles::RatingRotorcraft))
                    .col(boolean(PilotProfiles::RatingGlider))
                    .col(boolean(PilotProfiles::RatingLighterThanAir))
                    .col(boolean(PilotProfiles::RatingCenterlineThrust))
                    .col(boolean(PilotProfiles::RatingMultiEngineInstructor))
                    .col(boolean(PilotProfiles::RatingApMechanic))
                    .col(boolean(PilotProfiles::RatingAircraftInspector))
                    .col(text_null(PilotProfiles::TypeRatings))
                    .col(text_null(PilotProfiles::OtherRatings))
                    .col(integer(PilotProfiles::HoursTotal))
                    .col(integer(PilotProfiles::HoursTailwheel))
                    .col(integer(PilotProfiles::HoursRetractable))
                    .col(integer(PilotProfiles::HoursMultiEngine))
                    .col(integer(PilotProfiles::HoursTurboprop))
                    .col(integer(PilotProfiles::HoursPressurized))
                    .col(integer(PilotProfiles::HoursJet))
                    .col(integer(PilotProfiles::HoursRotorcraft))
                    .col(integer(PilotProfiles::HoursInstrumentActual))
                    .col(integer(PilotProfiles::HoursInstrumentSimulated))
                    .col(integer(PilotProfiles::HoursInstructor))
                    .col(integer(PilotProfiles::HoursSea))
                    .col(integer(PilotProfiles::HoursGlider))
                    .col(integer(PilotProfiles::HoursLast12Total))
                    .col(integer(PilotProfiles::HoursLast12Tailwheel))
                    .col(integer(PilotProfiles::HoursLast12Retractable))
                    .col(integer(PilotProfiles::HoursLast12MultiEngine))
                    .col(integer(PilotProfiles::HoursLast12Turboprop))
                    .col(integer(PilotProfiles::HoursLast12Pressurized))
                    .col(integer(PilotProfiles::HoursLast12Jet))
                    .col(integer(PilotProfiles::HoursLast12Rotorcraft))
                    .col(integer(PilotProfiles::HoursLast12InstrumentActual))
                    .col(integer(PilotProfiles::HoursLast12InstrumentSimulated))
                    .col(integer(PilotProfiles::HoursLast12Instructor))
                    .col(integer(PilotProfiles::HoursLast12Sea))
                    .col(integer(PilotProfiles::HoursLast12Glider))
                    .col(integer(PilotProfiles::HoursLast90Total))
                    .col(integer(PilotProfiles::HoursLast90Tailwheel))
                    .col(integer(PilotProfiles::HoursLast90Retractable))
                    .col(integer(PilotProfiles::HoursLast90MultiEngine))
                    .col(integer(PilotProfiles::HoursLast90Turboprop))
                    .col(integer(PilotProfiles::HoursLast90Pressurized))
                    .col(integer(PilotProfiles::HoursLast90Jet))
                    .col(integer(PilotProfiles::HoursLast90Rotorcraft))
                    .col(integer(PilotProfiles::HoursLast90InstrumentActual))
                    .col(integer(PilotProfiles::HoursLast90InstrumentSimulated))
                    .col(integer(PilotProfiles::HoursLast90Instructor))
                    .col(integer(PilotProfiles::HoursLast90Sea))
                    .col(integer(PilotProfiles::HoursLast90Glider))
                    .col(string_null(PilotProfiles::LastBiennialReviewDate))
                    .col(text_null(PilotProfiles::LastBiennialReviewModel))
                    .col(string_null(PilotProfiles::MedicalCertificateClass))
                    .col(string_null(PilotProfiles::MedicalCertificateDate))
                    .col(boolean(PilotProfiles::MedicalWaiversLimitations))
                    .col(text_null(PilotProfiles::MedicalWaiversDetails))
                    .col(boolean(PilotProfiles::HasAccidentsIncidents))
                    .col(text_null(PilotProfiles::AccidentsIncidentsDetails))
                    .col(boolean(PilotProfiles::HasCitations))
                    .col(text_null(PilotProfiles::CitationsDetails))
                    .col(boolean(PilotProfiles::HasFelonyConviction))
                    .col(text_null(PilotProfiles::FelonyConvictionDetails))
                    .col(boolean(PilotProfiles::HasDuiArrest))
                    .col(text_null(PilotProfiles::DuiArrestDetails))
                    .col(boolean(PilotProfiles::HasInsuranceCancellation))
                    .col(text_null(PilotProfiles::InsuranceCancellationDetails))
                    .col(boolean(PilotProfiles::HasFinancialInterest))
                    .col(json_binary_null(PilotProfiles::InsuredAircraftModels))
                    .col(timestamp(PilotProfiles::CreatedAt))
                    .col(timestamp(PilotProfiles::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PILOT_PROFILE_USER_ID)
                    .from_tbl(PilotProfiles::Table)
                    .from_col(PilotProfiles::UserId)
                    .to_tbl(Users::Table)
                    .to_col(Users::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_PILOT_PROFILE_USER_ID)
                    .table(PilotProfiles::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(PilotProfiles::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PilotProfiles {
    Table,
    Id,
    UserId,
    DateOfBirth,
    Address,
    City,
    State,
    ZipCode,
    HomePhone,
    WorkPhone,
    Employer,
    DateEmployed,
    Position,
    AirmenCertificateNo,
    CertificateStudent,
    CertificatePrivate,
    CertificateCommercial,
    CertificateAtp,
    CertificateInstructor,
    RatingSingleEngineLand,
    RatingMultiEngineLand,
    RatingSingleEngineSea,
    RatingMultiEngineSea,
    RatingInstrument,
    RatingRotorcraft,
    RatingGlider,
    RatingLighterThanAir,
    RatingCenterlineThrust,
    RatingMultiEngineInstructor,
    RatingApMechanic,
    RatingAircraftInspector,
    TypeRatings,
    OtherRatings,
    HoursTotal,
    HoursTailwheel,
    HoursRetractable,
    HoursMultiEngine,
    HoursTurboprop,
    HoursPressurized,
    HoursJet,
    HoursRotorcraft,
    HoursInstrumentActual,
    HoursInstrumentSimulated,
    HoursInstructor,
    HoursSea,
    HoursGlider,
    HoursLast12Total,
    HoursLast12Tailwheel,
    HoursLast12Retractable,
    HoursLast12MultiEngine,
    HoursLast12Turboprop,
    HoursLast12Pressurized,
    HoursLast12Jet,
    HoursLast12Rotorcraft,
    HoursLast12InstrumentActual,
    HoursLast12InstrumentSimulated,
    HoursLast12Instructor,
    HoursLast12Sea,
    HoursLast12Glider,
    HoursLast90Total,
    HoursLast90Tailwheel,
    HoursLast90Retractable,
    HoursLast90MultiEngine,
    HoursLast90Turboprop,
    HoursLast90Pressurized,
    HoursLast90Jet,
    HoursLast90Rotorcraft,
    HoursLast90InstrumentActual,
    HoursLast90InstrumentSimulated,
    HoursLast90Instructor,
    HoursLast90Sea,
    HoursLast90Glider,
    LastBiennialReviewDate,
    LastBiennialReviewModel,
    MedicalCertificateClass,
    MedicalCertificateDate,
    MedicalWaiversLimitations,
    MedicalWaiversDetails,
    HasAccidentsIncidents,
    AccidentsIncidentsDetails,
    HasCitations,
    CitationsDetails,
    HasFelonyConviction,
    FelonyConvictionDetails,
    HasDuiArrest,
    DuiArrestDetails,
    HasInsuranceCancellation,
    InsuranceCancellationDetails,
    HasFinancialInterest,
    InsuredAircraftModels,
    CreatedAt,
    UpdatedAt,
}
