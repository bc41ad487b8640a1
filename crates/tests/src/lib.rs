

#[cfg(test)]
mod case_status_tests;

#[cfg(test)]
mod property_tests;

#[cfg(test)]
mod custody_log_tests;




#[cfg(test)]
mod user_tests;



#[cfg(test)]
mod health_tests;
