//! Flight booking records.
//!
//! Ten layer groups accumulate the booking fields, from the base identifier
//! through airport, airline, leg, crew, passenger, and payment details, to
//! the issued ticket. The terminal [`FlightBooking`] exposes the fare
//! computed from the base fare and travel class.

use crate::fields::{Gender, Shift, TravelClass};
use crate::record::RecordCore;
use chrono::{Local, NaiveDate};
use regdesk_shared::{FieldError, Validate};
use serde::Serialize;

/// Originating airport.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Airport {
    /// Airport display name.
    pub airport_name: String,
    /// Three-letter uppercase airport code.
    #[validate(custom = "crate::rules::three_uppercase_letters")]
    pub code: String,
    /// City or region the airport serves.
    pub location: String,
}

impl Airport {
    /// Validate and build the airport group.
    pub fn new(airport_name: String, code: String, location: String) -> Result<Self, FieldError> {
        let group = Self {
            airport_name,
            code,
            location,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Operating airline.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Airline {
    /// Airline display name.
    pub airline_name: String,
    /// Two-to-four letter airline code.
    #[validate(field = "airlineCode", custom = "crate::rules::two_to_four_letters")]
    pub airline_code: String,
    /// Airline contact email.
    #[validate(field = "contactEmail", custom = "crate::rules::email")]
    pub contact_email: String,
}

impl Airline {
    /// Validate and build the airline group.
    pub fn new(
        airline_name: String,
        airline_code: String,
        contact_email: String,
    ) -> Result<Self, FieldError> {
        let group = Self {
            airline_name,
            airline_code,
            contact_email,
        };
        group.validate()?;
        Ok(group)
    }
}

/// The flight leg being booked. The fare bound is checked before the
/// free-text route fields.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct FlightLeg {
    /// Base fare before tax and class adjustments.
    #[validate(field = "baseFare", custom = "crate::rules::positive_amount")]
    pub base_fare: f64,
    /// Flight number.
    #[validate(field = "flightNumber", non_empty)]
    pub flight_number: String,
    /// Departure city.
    #[validate(non_empty)]
    pub departure: String,
    /// Destination city.
    #[validate(non_empty)]
    pub destination: String,
}

impl FlightLeg {
    /// Validate and build the flight leg group.
    pub fn new(
        flight_number: String,
        departure: String,
        destination: String,
        base_fare: f64,
    ) -> Result<Self, FieldError> {
        let group = Self {
            base_fare,
            flight_number,
            departure,
            destination,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Assigned pilot.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Pilot {
    /// Pilot display name.
    pub pilot_name: String,
    /// License identifier.
    #[validate(field = "licenseNumber", non_empty)]
    pub license_number: String,
    /// Years of flight experience, at least two.
    #[validate(field = "experienceYears", range(min = 2))]
    pub experience_years: i32,
}

impl Pilot {
    /// Validate and build the pilot group.
    pub fn new(
        pilot_name: String,
        license_number: String,
        experience_years: i32,
    ) -> Result<Self, FieldError> {
        let group = Self {
            pilot_name,
            license_number,
            experience_years,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Assigned cabin crew member.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct CabinCrew {
    /// Crew member display name.
    pub crew_name: String,
    /// Crew role on board.
    #[validate(non_empty)]
    pub role: String,
    /// Day or night shift.
    pub shift: Shift,
}

impl CabinCrew {
    /// Convert the shift, then validate the remaining fields.
    pub fn new(crew_name: String, role: String, shift: &str) -> Result<Self, FieldError> {
        let shift = Shift::parse("shift", shift)?;
        let group = Self {
            crew_name,
            role,
            shift,
        };
        group.validate()?;
        Ok(group)
    }
}

/// The travelling passenger.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Passenger {
    /// Passenger display name.
    pub passenger_name: String,
    /// Passenger age, strictly positive.
    #[validate(range(min = 1))]
    pub age: i32,
    /// Passenger gender.
    pub gender: Gender,
    /// Passenger contact detail.
    pub contact: String,
}

impl Passenger {
    /// Convert the gender, then validate the remaining fields.
    pub fn new(
        passenger_name: String,
        age: i32,
        gender: &str,
        contact: String,
    ) -> Result<Self, FieldError> {
        let gender = Gender::parse("gender", gender)?;
        let group = Self {
            passenger_name,
            age,
            gender,
            contact,
        };
        group.validate()?;
        Ok(group)
    }
}

/// Seat and class selection, stamped with the booking date.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Selected seat.
    pub seat_number: String,
    /// Travel class determining the fare discount.
    pub travel_class: TravelClass,
    /// Date the booking was made.
    pub booking_date: NaiveDate,
}

impl Booking {
    /// Convert the travel class and stamp the booking date.
    pub fn new(seat_number: String, travel_class: &str) -> Result<Self, FieldError> {
        let travel_class = TravelClass::parse("travelClass", travel_class)?;
        Ok(Self {
            seat_number,
            travel_class,
            booking_date: Local::now().date_naive(),
        })
    }
}

/// Payment taken for the booking.
#[derive(Debug, Clone, PartialEq, Serialize, regdesk_validate_derive::Validate)]
#[serde(rename_all = "camelCase")]
#[validate(error = "FieldError")]
pub struct Payment {
    /// Amount paid, strictly positive.
    #[validate(field = "amountPaid", custom = "crate::rules::positive_amount")]
    pub amount_paid: f64,
    /// Payment method description.
    #[validate(field = "paymentMethod", non_empty)]
    pub payment_method: String,
    /// Date the payment was taken.
    pub payment_date: NaiveDate,
}

impl Payment {
    /// Validate and build the payment group, stamping the payment date.
    pub fn new(payment_method: String, amount_paid: f64) -> Result<Self, FieldError> {
        let group = Self {
            amount_paid,
            payment_method,
            payment_date: Local::now().date_naive(),
        };
        group.validate()?;
        Ok(group)
    }
}

/// The issued ticket.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Ticket identifier.
    pub ticket_number: String,
    /// Date the ticket was issued.
    pub issue_date: NaiveDate,
}

impl Ticket {
    /// Build the ticket group, stamping the issue date.
    #[must_use]
    pub fn new(ticket_number: String) -> Self {
        Self {
            ticket_number,
            issue_date: Local::now().date_naive(),
        }
    }
}

/// Raw console field set for one booking, in read order.
#[derive(Debug, Clone)]
pub struct FlightInput {
    /// Record identifier.
    pub id: i32,
    /// Airport display name.
    pub airport_name: String,
    /// Airport code.
    pub code: String,
    /// Airport location.
    pub location: String,
    /// Airline display name.
    pub airline_name: String,
    /// Airline code.
    pub airline_code: String,
    /// Airline contact email.
    pub contact_email: String,
    /// Flight number.
    pub flight_number: String,
    /// Departure city.
    pub departure: String,
    /// Destination city.
    pub destination: String,
    /// Base fare.
    pub base_fare: f64,
    /// Pilot display name.
    pub pilot_name: String,
    /// Pilot license identifier.
    pub license_number: String,
    /// Pilot experience in years.
    pub experience_years: i32,
    /// Crew member display name.
    pub crew_name: String,
    /// Crew role.
    pub role: String,
    /// Crew shift spelling.
    pub shift: String,
    /// Passenger display name.
    pub passenger_name: String,
    /// Passenger age.
    pub age: i32,
    /// Passenger gender spelling.
    pub gender: String,
    /// Passenger contact detail.
    pub contact: String,
    /// Seat selection.
    pub seat_number: String,
    /// Travel class spelling.
    pub travel_class: String,
    /// Payment method description.
    pub payment_method: String,
    /// Amount paid.
    pub amount_paid: f64,
    /// Ticket identifier.
    pub ticket_number: String,
}

/// Fully validated flight booking record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightBooking {
    /// Base identifier and stamp dates.
    pub core: RecordCore,
    /// Originating airport.
    pub airport: Airport,
    /// Operating airline.
    pub airline: Airline,
    /// Booked flight leg.
    pub leg: FlightLeg,
    /// Assigned pilot.
    pub pilot: Pilot,
    /// Assigned cabin crew member.
    pub crew: CabinCrew,
    /// Travelling passenger.
    pub passenger: Passenger,
    /// Seat and class selection.
    pub booking: Booking,
    /// Payment taken.
    pub payment: Payment,
    /// Issued ticket.
    pub ticket: Ticket,
}

impl FlightBooking {
    /// Fare tax applied to every booking.
    const TAX_RATE: f64 = 0.15;
    /// Discount applied to non-economy classes.
    const CLASS_DISCOUNT: f64 = 0.10;

    /// Base fare plus 15% tax, minus the 10% discount for non-economy
    /// classes.
    #[must_use]
    pub fn final_fare(&self) -> f64 {
        let base = self.leg.base_fare;
        let discount = if self.booking.travel_class == TravelClass::Economy {
            0.0
        } else {
            base * Self::CLASS_DISCOUNT
        };
        base + base * Self::TAX_RATE - discount
    }
}

impl TryFrom<FlightInput> for FlightBooking {
    type Error = FieldError;

    /// Build every layer group in order; the first invalid field aborts the
    /// whole record.
    fn try_from(input: FlightInput) -> Result<Self, Self::Error> {
        let core = RecordCore::new(input.id)?;
        let airport = Airport::new(input.airport_name, input.code, input.location)?;
        let airline = Airline::new(input.airline_name, input.airline_code, input.contact_email)?;
        let leg = FlightLeg::new(
            input.flight_number,
            input.departure,
            input.destination,
            input.base_fare,
        )?;
        let pilot = Pilot::new(
            input.pilot_name,
            input.license_number,
            input.experience_years,
        )?;
        let crew = CabinCrew::new(input.crew_name, input.role, &input.shift)?;
        let passenger = Passenger::new(input.passenger_name, input.age, &input.gender, input.contact)?;
        let booking = Booking::new(input.seat_number, &input.travel_class)?;
        let payment = Payment::new(input.payment_method, input.amount_paid)?;
        let ticket = Ticket::new(input.ticket_number);

        Ok(Self {
            core,
            airport,
            airline,
            leg,
            pilot,
            crew,
            passenger,
            booking,
            payment,
            ticket,
        })
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp, reason = "derived fares are exact for these inputs")]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn builds_a_complete_booking_from_valid_input() -> Result<(), FieldError> {
        let booking = FlightBooking::try_from(valid_input())?;
        assert_eq!(booking.core.id, 7);
        assert_eq!(booking.airport.code, "KGL");
        assert_eq!(booking.crew.shift, Shift::Day);
        assert_eq!(booking.passenger.gender, Gender::Female);
        assert_eq!(booking.booking.travel_class, TravelClass::Economy);
        assert_eq!(booking.payment.amount_paid, 1200.0);
        assert_eq!(booking.ticket.ticket_number, "TK-0099");
        Ok(())
    }

    #[test]
    fn economy_fare_adds_tax_without_discount() -> Result<(), FieldError> {
        let mut input = valid_input();
        input.base_fare = 1000.0;
        input.travel_class = "Economy".to_string();
        let booking = FlightBooking::try_from(input)?;
        assert_eq!(booking.final_fare(), 1150.0);
        Ok(())
    }

    #[test]
    fn non_economy_fares_take_the_class_discount() -> Result<(), FieldError> {
        let mut input = valid_input();
        input.base_fare = 1000.0;
        input.travel_class = "Business".to_string();
        let booking = FlightBooking::try_from(input.clone())?;
        assert_eq!(booking.final_fare(), 1050.0);

        input.travel_class = "First".to_string();
        let booking = FlightBooking::try_from(input)?;
        assert_eq!(booking.final_fare(), 1050.0);
        Ok(())
    }

    #[test]
    fn lowercase_airport_code_is_rejected() {
        let mut input = valid_input();
        input.code = "ab1".to_string();
        let error = FlightBooking::try_from(input).err();
        assert_eq!(
            error.map(|e| e.to_string()),
            Some("code: value must be 3 uppercase letters".to_string())
        );
    }

    #[test]
    fn earlier_layers_win_when_several_fields_are_invalid() {
        let mut input = valid_input();
        input.airline_code = "X".to_string();
        input.shift = "Morning".to_string();
        let error = FlightBooking::try_from(input).err();
        assert_eq!(error.map(|e| e.field), Some("airlineCode"));
    }

    #[test]
    fn shift_conversion_precedes_the_role_check() {
        let mut input = valid_input();
        input.role = String::new();
        input.shift = "Morning".to_string();
        let error = FlightBooking::try_from(input).err();
        assert_eq!(error.map(|e| e.field), Some("shift"));
    }

    #[test]
    fn pilot_experience_boundary_sits_at_two_years() {
        let mut input = valid_input();
        input.experience_years = 2;
        assert!(FlightBooking::try_from(input.clone()).is_ok());

        input.experience_years = 1;
        let error = FlightBooking::try_from(input).err();
        assert_eq!(error.map(|e| e.field), Some("experienceYears"));
    }

    proptest! {
        #[test]
        fn economy_fare_never_drops_below_base(base in 0.01f64..1.0e9) {
            let mut input = valid_input();
            input.base_fare = base;
            input.travel_class = "Economy".to_string();
            let booking = FlightBooking::try_from(input);
            prop_assert!(booking.is_ok_and(|b| b.final_fare() >= base));
        }
    }

    fn valid_input() -> FlightInput {
        FlightInput {
            id: 7,
            airport_name: "Kigali International".to_string(),
            code: "KGL".to_string(),
            location: "Kigali".to_string(),
            airline_name: "RwandAir".to_string(),
            airline_code: "WB".to_string(),
            contact_email: "ops@rwandair.rw".to_string(),
            flight_number: "WB104".to_string(),
            departure: "Kigali".to_string(),
            destination: "Nairobi".to_string(),
            base_fare: 850.0,
            pilot_name: "Alice Uwase".to_string(),
            license_number: "LIC-4471".to_string(),
            experience_years: 9,
            crew_name: "Jean Bosco".to_string(),
            role: "Purser".to_string(),
            shift: "Day".to_string(),
            passenger_name: "Grace Ingabire".to_string(),
            age: 34,
            gender: "Female".to_string(),
            contact: "0788123456".to_string(),
            seat_number: "14C".to_string(),
            travel_class: "Economy".to_string(),
            payment_method: "Card".to_string(),
            amount_paid: 1200.0,
            ticket_number: "TK-0099".to_string(),
        }
    }
}
