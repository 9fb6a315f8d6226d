pub mod configuration;

pub mod federalholidays;

pub mod manager {
    pub mod namedobject;
    pub mod managererror;
    pub mod manager;
}

pub mod time {
    pub mod utility;
    pub mod clock;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod weekendadjustment;
        pub mod fixeddateholiday;
        pub mod nthweekdayholiday;
        pub mod lastweekdayholiday;
    }

    pub mod calendar {
        pub mod holiday;
        pub mod federalcalendar;
        pub mod holidayquery;
        pub mod businessdaycalendar;
    }
}
