//! Shared model builders for generator tests.

use vimbind_model::{ComplexType, EnumLiteral, EnumType, Field, SchemaModel, TypeDef};

/// A vim25-shaped schema exercising every generated form: enumerations
/// (documented and not), an extension chain, all three cardinalities, and
/// a fault chain with payload fields.
pub fn make_vim_schema() -> SchemaModel {
    let mut schema = SchemaModel::new("vim25", "urn:vim25");

    schema.push(TypeDef::Complex(ComplexType::new("DynamicData")));

    let mut power = EnumType::new("VirtualMachinePowerState", Vec::<String>::new())
        .with_doc("The current power state of a virtual machine.");
    power.push(EnumLiteral::new("poweredOff").with_doc("The machine is powered off."));
    power.push(EnumLiteral::new("poweredOn").with_doc("The machine is running."));
    power.push(EnumLiteral::new("suspended"));
    schema.push(TypeDef::Enum(power));

    schema.push(TypeDef::Enum(EnumType::new(
        "ManagedEntityStatus",
        ["gray", "green", "yellow", "red"],
    )));

    schema.push(TypeDef::Complex(
        ComplexType::new("ManagedObjectReference")
            .with_field(Field::required("type", "xsd:string"))
            .with_field(Field::required("value", "xsd:string")),
    ));

    schema.push(TypeDef::Complex(
        ComplexType::new("ManagedEntity")
            .extends("DynamicData")
            .with_doc("Base type for all managed objects in the inventory.")
            .with_field(Field::required("name", "xsd:string"))
            .with_field(Field::optional("parent", "vim25:ManagedObjectReference"))
            .with_field(Field::optional("overallStatus", "vim25:ManagedEntityStatus")),
    ));

    schema.push(TypeDef::Complex(
        ComplexType::new("VirtualMachine")
            .extends("ManagedEntity")
            .with_field(Field::required("powerState", "vim25:VirtualMachinePowerState"))
            .with_field(Field::optional("bootTime", "xsd:dateTime"))
            .with_field(Field::repeated("datastore", "vim25:ManagedObjectReference")),
    ));

    schema.push(TypeDef::Complex(
        ComplexType::new("MethodFault")
            .with_field(Field::repeated("faultMessage", "xsd:string")),
    ));
    schema.push(TypeDef::Complex(
        ComplexType::new("VimFault").extends("MethodFault"),
    ));
    schema.push(TypeDef::Complex(
        ComplexType::new("NotFound").extends("VimFault"),
    ));
    schema.push(TypeDef::Complex(
        ComplexType::new("InvalidPowerState")
            .extends("VimFault")
            .with_field(Field::optional("requestedState", "vim25:VirtualMachinePowerState"))
            .with_field(Field::required("existingState", "vim25:VirtualMachinePowerState")),
    ));

    schema
}

/// A schema with enumerations only, for output tests that need no faults.
pub fn make_enum_only_schema() -> SchemaModel {
    let mut schema = SchemaModel::new("core", "urn:vim25/core");
    schema.push(TypeDef::Enum(EnumType::new(
        "HostSystemConnectionState",
        ["connected", "disconnected", "notResponding"],
    )));
    schema
}
