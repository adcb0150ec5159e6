use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Event {
    Table,
    Id,
    Title,
    Date,
    Time,
    Location,
    Description,
    Cost,
    Category,
}

#[derive(Iden, Clone)]
pub enum Signup {
    Table,
    Id,
    EventId,
    EventTitle,
    EventDate,
    EventLocation,
    EventCost,
    FirstName,
    LastName,
    Email,
    BeenBefore,
    HeardAboutUs,
    PaymentMethod,
    AcceptLiability,
    AcceptPayment,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum Profile {
    Table,
    Id,
    FirstName,
    LastName,
    Role,
    PhotoUrl,
    Bio,
    BioLong,
    Specialty,
    TeachingStyle,
    TeachingSince,
    FavoriteSong,
    PrivateLessons,
    InstagramUrl,
    PhoneNumber,
}
