use ndarray::{ArrayViewD, CowArray, IxDyn, Zip};
use num_traits::Float;

use crate::constants::{
    AREA_RATIO_MIN, GAMMA_MIN, GAS_CONSTANT_MIN, PRESSURE_RATIO_MAX, PRESSURE_RATIO_MIN,
    STAGNATION_TEMPERATURE_MIN,
};
use crate::errors::{Bound, Parameter, RelationError};
use crate::utils::quantity::{broadcast_shape, Operand, Quantity};

const PRESSURE_RATIO: Bound = Bound::HalfOpen {
    lower: PRESSURE_RATIO_MIN,
    upper: PRESSURE_RATIO_MAX,
};

/// Ideal characteristic velocity c* [m/s] over scalars or broadcast arrays.
pub fn c_star(
    gamma: impl Into<Operand>,
    r: impl Into<Operand>,
    t0: impl Into<Operand>,
) -> Result<Quantity, RelationError> {
    let operands: [Operand; 3] = [gamma.into(), r.into(), t0.into()];
    let [gamma, r, t0] = &operands;

    let gamma = gamma.numeric(Parameter::Gamma)?;
    let r = r.numeric(Parameter::GasConstant)?;
    let t0 = t0.numeric(Parameter::StagnationTemperature)?;

    check_domain(Parameter::Gamma, &gamma, Bound::GreaterThan(GAMMA_MIN))?;
    check_domain(
        Parameter::GasConstant,
        &r,
        Bound::GreaterThan(GAS_CONSTANT_MIN),
    )?;
    check_domain(
        Parameter::StagnationTemperature,
        &t0,
        Bound::GreaterThan(STAGNATION_TEMPERATURE_MIN),
    )?;

    let shape = broadcast_shape(&[
        (Parameter::Gamma, gamma.shape()),
        (Parameter::GasConstant, r.shape()),
        (Parameter::StagnationTemperature, t0.shape()),
    ])?;

    let values = Zip::from(broadcast_to(Parameter::Gamma, &gamma, &shape)?)
        .and(broadcast_to(Parameter::GasConstant, &r, &shape)?)
        .and(broadcast_to(Parameter::StagnationTemperature, &t0, &shape)?)
        .map_collect(|&gamma, &r, &t0| characteristic_velocity(gamma, r, t0));

    Ok(Quantity::from_values(values, all_scalar(&operands)))
}

/// Ideal thrust coefficient C_F over scalars or broadcast arrays.
pub fn c_f(
    gamma: impl Into<Operand>,
    pe_p0: impl Into<Operand>,
    pa_p0: impl Into<Operand>,
    ae_astar: impl Into<Operand>,
) -> Result<Quantity, RelationError> {
    let operands: [Operand; 4] = [
        gamma.into(),
        pe_p0.into(),
        pa_p0.into(),
        ae_astar.into(),
    ];
    let [gamma, pe_p0, pa_p0, ae_astar] = &operands;

    let gamma = gamma.numeric(Parameter::Gamma)?;
    let pe_p0 = pe_p0.numeric(Parameter::ExitPressureRatio)?;
    let pa_p0 = pa_p0.numeric(Parameter::AmbientPressureRatio)?;
    let ae_astar = ae_astar.numeric(Parameter::AreaRatio)?;

    check_domain(Parameter::Gamma, &gamma, Bound::GreaterThan(GAMMA_MIN))?;
    check_domain(Parameter::ExitPressureRatio, &pe_p0, PRESSURE_RATIO)?;
    check_domain(Parameter::AmbientPressureRatio, &pa_p0, PRESSURE_RATIO)?;
    check_domain(Parameter::AreaRatio, &ae_astar, Bound::AtLeast(AREA_RATIO_MIN))?;

    let shape = broadcast_shape(&[
        (Parameter::Gamma, gamma.shape()),
        (Parameter::ExitPressureRatio, pe_p0.shape()),
        (Parameter::AmbientPressureRatio, pa_p0.shape()),
        (Parameter::AreaRatio, ae_astar.shape()),
    ])?;

    let values = Zip::from(broadcast_to(Parameter::Gamma, &gamma, &shape)?)
        .and(broadcast_to(Parameter::ExitPressureRatio, &pe_p0, &shape)?)
        .and(broadcast_to(Parameter::AmbientPressureRatio, &pa_p0, &shape)?)
        .and(broadcast_to(Parameter::AreaRatio, &ae_astar, &shape)?)
        .map_collect(|&gamma, &pe_p0, &pa_p0, &ae_astar| {
            thrust_coefficient(gamma, pe_p0, pa_p0, ae_astar)
        });

    Ok(Quantity::from_values(values, all_scalar(&operands)))
}

/// Unchecked c* [m/s], for inputs already validated upstream.
pub fn characteristic_velocity<F: Float>(gamma: F, r: F, t0: F) -> F {
    let one = F::one();
    let two = one + one;

    let exponent = (gamma + one) / (gamma - one);
    let term = ((gamma + one) / two).powf(exponent);

    ((one / gamma) * term * r * t0).sqrt()
}

/// Unchecked C_F. A negative radicand from rounding near pe_p0 = 1 yields NaN.
pub fn thrust_coefficient<F: Float>(gamma: F, pe_p0: F, pa_p0: F, ae_astar: F) -> F {
    let one = F::one();
    let two = one + one;

    let exponent = (gamma + one) / (gamma - one);
    let term1 = ((two * gamma * gamma / (gamma - one))
        * (two / (gamma + one)).powf(exponent)
        * (one - pe_p0.powf((gamma - one) / gamma)))
    .sqrt();
    let term2 = (pe_p0 - pa_p0) * ae_astar;

    term1 + term2
}

// A single offending element fails the whole call.
fn check_domain(
    parameter: Parameter,
    values: &CowArray<'_, f64, IxDyn>,
    bound: Bound,
) -> Result<(), RelationError> {
    if values.iter().any(|&value| bound.excludes(value)) {
        return Err(RelationError::OutOfDomain { parameter, bound });
    }
    Ok(())
}

fn broadcast_to<'a>(
    parameter: Parameter,
    values: &'a CowArray<'_, f64, IxDyn>,
    shape: &[usize],
) -> Result<ArrayViewD<'a, f64>, RelationError> {
    values
        .broadcast(shape)
        .ok_or_else(|| RelationError::ShapeMismatch {
            parameter,
            shape: values.shape().to_vec(),
            target: shape.to_vec(),
        })
}

fn all_scalar(operands: &[Operand]) -> bool {
    operands
        .iter()
        .all(|operand| matches!(operand, Operand::Scalar(_)))
}
