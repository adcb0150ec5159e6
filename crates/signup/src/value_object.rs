use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(EnumString, Display, VariantArray, Clone, Copy, Debug, PartialEq, Eq, AsRefStr)]
pub enum PriorAttendance {
    #[strum(to_string = "First time EVER!")]
    FirstTime,
    #[strum(to_string = "I've been before!")]
    Returning,
}

#[derive(EnumString, Display, VariantArray, Clone, Copy, Debug, PartialEq, Eq, AsRefStr)]
pub enum ReferralSource {
    #[strum(to_string = "Nashville Palace")]
    NashvillePalace,
    #[strum(to_string = "Social Media")]
    SocialMedia,
    #[strum(to_string = "A friend invited me")]
    FriendInvite,
    #[strum(to_string = "Church")]
    Church,
}

#[derive(EnumString, Display, VariantArray, Clone, Copy, Debug, PartialEq, Eq, AsRefStr)]
pub enum PaymentMethod {
    #[strum(to_string = "Venmo @CountryCitySwing")]
    Venmo,
    #[strum(to_string = "Cash")]
    Cash,
    #[strum(to_string = "A friend paid for me")]
    FriendPaid,
    #[strum(to_string = "Class Voucher")]
    ClassVoucher,
    #[strum(to_string = "Volunteer")]
    Volunteer,
}
