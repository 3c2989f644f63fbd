#[cfg(test)]
mod common;

#[cfg(test)]
mod report_tests;

#[cfg(test)]
mod overview_tests;

#[cfg(test)]
mod dashboard_tests;



#[cfg(test)]
mod health_tests;

#[cfg(test)]
mod profile_tests;

#[cfg(test)]
mod upstream_tests;
